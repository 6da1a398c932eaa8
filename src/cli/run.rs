//! Dispatch parsed arguments to the command handlers.
//!
//! Every handler prints its own output and returns the exit status.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        init::init,
        query::{Predicate, Query, parse, predicate, query},
        scan::scan,
    },
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Parse(cmd)) => parse(cmd),
        Some(Command::Get(args)) => query(Query::Get, args),
        Some(Command::First(args)) => query(Query::First, args),
        Some(Command::Second(args)) => query(Query::Second, args),
        Some(Command::Len(args)) => query(Query::Len, args),
        Some(Command::NumOptions(args)) => query(Query::NumOptions, args),
        Some(Command::Contains(args)) => predicate(Predicate::Contains, args),
        Some(Command::HasOption(args)) => predicate(Predicate::HasOption, args),
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
