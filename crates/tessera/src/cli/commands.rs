//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tessera - marketing site and admin console
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(about = "Tessera Financial marketing site and admin console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the site, admin API, and function endpoints
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<String>,
    },

    /// Admin console commands
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Send simulated confirmation emails
    #[command(subcommand)]
    Notify(NotifyCommands),

    /// SMTP settings commands
    #[command(subcommand)]
    Smtp(SmtpCommands),
}

/// Admin list screens
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// Blog articles
    Articles,
    /// FAQ entries
    Faqs,
    /// User accounts
    Users,
    /// Waitlist items
    Waitlist,
}

/// Search, filter, and sort options for a list screen
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive text search
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Exact category (role for users); "All" disables the filter
    #[arg(long)]
    pub category: Option<String>,

    /// Exact status (priority for waitlist items)
    #[arg(long)]
    pub status: Option<String>,

    /// Sort field, e.g. `date`, `name`, `investment_total`
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub order: Option<String>,
}

/// Admin subcommands
#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Filtered, sorted listing of one screen
    List {
        /// Screen to list
        entity: Entity,

        /// Search, filter, and sort
        #[command(flatten)]
        args: ListArgs,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Dashboard aggregates
    Dashboard {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Notification subcommands
#[derive(Subcommand, Debug)]
pub enum NotifyCommands {
    /// Waitlist signup confirmation
    Waitlist {
        /// Recipient
        #[arg(long)]
        email: String,

        /// Product joined
        #[arg(long)]
        product: String,

        /// Recipient's name
        #[arg(long)]
        name: Option<String>,
    },

    /// Contact form acknowledgement
    Contact {
        /// Recipient
        #[arg(long)]
        email: String,

        /// Recipient's name
        #[arg(long)]
        name: String,

        /// Message subject
        #[arg(long)]
        subject: String,
    },
}

/// SMTP subcommands
#[derive(Subcommand, Debug)]
pub enum SmtpCommands {
    /// Check SMTP settings (no connection is made)
    Test {
        /// Relay host
        #[arg(long)]
        host: String,

        /// Relay port
        #[arg(long, default_value_t = 587)]
        port: u16,

        /// Login user
        #[arg(long)]
        user: String,

        /// Login password
        #[arg(long, env = "TESSERA_SMTP_PASSWORD")]
        password: String,

        /// Use implicit TLS
        #[arg(long)]
        secure: bool,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
