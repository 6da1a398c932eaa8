pub mod init;
pub mod query;
pub mod scan;
