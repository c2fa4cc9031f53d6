//! Command handlers for CLI operations

mod check;
mod join;

pub use check::cmd_check;
pub use join::cmd_join_themes;
