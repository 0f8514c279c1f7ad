//! Command handlers, one module per subcommand.

pub mod count;
pub mod init;
pub mod models;
pub mod report;
