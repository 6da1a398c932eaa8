//! Commands answering questions about a single annotation string.

use anyhow::{Context, Result};

use super::super::{
    args::{KeyArgs, ParseCommand, ValueArgs},
    exit_status::ExitStatus,
    report,
};
use crate::tag::Tag;

/// A value lookup on one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Get,
    First,
    Second,
    Len,
    NumOptions,
}

impl Query {
    pub fn answer(self, tag: &Tag, key: &str) -> String {
        match self {
            Self::Get => tag.get(key),
            Self::First => tag.first(key).to_string(),
            Self::Second => tag.second(key).to_string(),
            Self::Len => tag.len(key).to_string(),
            Self::NumOptions => tag.num_options(key).to_string(),
        }
    }
}

/// A yes/no test on one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Contains,
    HasOption,
}

impl Predicate {
    pub fn answer(self, tag: &Tag, key: &str, value: &str) -> bool {
        match self {
            Self::Contains => tag.contains(key, value),
            Self::HasOption => tag.has_option(key, value),
        }
    }
}

pub fn parse(cmd: ParseCommand) -> Result<ExitStatus> {
    let tag = Tag::parse(&cmd.tag);

    if cmd.json {
        let json = serde_json::to_string_pretty(&tag).context("Failed to serialize annotation")?;
        println!("{}", json);
    } else if tag.is_empty() {
        report::print_empty_warning(&cmd.tag);
    } else {
        report::print_tag(&tag);
    }

    Ok(ExitStatus::Success)
}

pub fn query(query: Query, KeyArgs { tag, key }: KeyArgs) -> Result<ExitStatus> {
    println!("{}", query.answer(&Tag::parse(&tag), &key));
    Ok(ExitStatus::Success)
}

pub fn predicate(predicate: Predicate, args: ValueArgs) -> Result<ExitStatus> {
    let answer = predicate.answer(&Tag::parse(&args.tag), &args.key, &args.value);
    println!("{}", answer);
    Ok(ExitStatus::from_answer(answer))
}
