//! Command-line interface for the `tessera` binary.

mod admin;
mod commands;
mod notify;
mod server;

pub use admin::{handle_admin_command, render_list};
pub use commands::{
    AdminCommands, Cli, Commands, Entity, ListArgs, NotifyCommands, OutputFormat, SmtpCommands,
};
pub use notify::{handle_notify_command, handle_smtp_command};
pub use server::run_server;
