//! CLI subcommands.

pub mod init;
pub mod list;
pub mod preview;
pub mod render;
