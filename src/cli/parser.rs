use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for campusclub
/// Event console for campus clubs: events, volunteers, feedback and analytics
#[derive(Parser, Debug)]
#[command(
    name = "campusclub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Campus club event console: create events, check in volunteers and track organizer efficiency",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Start the session without the demo events
    #[arg(global = true, long = "no-seed")]
    pub no_seed: bool,

    /// Fail with an error when a command targets an unknown event or volunteer
    #[arg(global = true, long = "strict")]
    pub strict: bool,

    /// Run in test mode (no config file writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// One line typed in the interactive shell.
#[derive(Parser, Debug)]
#[command(name = "campusclub", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Create the configuration directory and a default configuration file
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,
    },

    /// List events, most recent first
    List {
        /// Case-insensitive search on the title
        #[arg(long, short)]
        query: Option<String>,

        /// Only events waiting for approval
        #[arg(long, conflicts_with = "status")]
        pending: bool,

        /// Only events with this approval status (pending, approved, rejected)
        #[arg(long)]
        status: Option<String>,

        /// Filter by event date.
        ///
        /// Supported formats:
        /// - YYYY, YYYY-MM, YYYY-MM-DD
        /// - ranges start:end in the same formats (e.g. "2025-11:2025-12")
        /// - all → no filtering
        ///
        /// Events whose date is not a valid YYYY-MM-DD are hidden when a
        /// period is given.
        #[arg(long, short)]
        period: Option<String>,

        /// Print the events as JSON
        #[arg(long)]
        json: bool,
    },

    /// Quick view of one event: volunteers, tasks and snapshot
    Show {
        /// Event id
        event: String,
    },

    /// Create a new event (starts as pending)
    Create {
        #[arg(long, default_value = "")]
        title: String,

        /// Event date (free text, YYYY-MM-DD recommended)
        #[arg(long, default_value = "")]
        date: String,

        #[arg(long, default_value = "")]
        venue: String,

        /// Planned duration in hours (default 2)
        #[arg(long)]
        hours: Option<f64>,

        /// Template: stall, seminar or drive
        #[arg(long)]
        template: Option<String>,
    },

    /// Add a volunteer to an event
    Volunteer {
        /// Event id
        event: String,

        #[arg(long, default_value = "New Volunteer")]
        name: String,

        #[arg(long, default_value = "Helper")]
        role: String,

        /// signed-up, assigned or checked-in
        #[arg(long, default_value = "signed-up")]
        status: String,

        /// Live-view position, percent of the map width
        #[arg(long, default_value_t = 50.0)]
        x: f64,

        /// Live-view position, percent of the map height
        #[arg(long, default_value_t = 50.0)]
        y: f64,

        /// Contribution score
        #[arg(long, default_value_t = 0.0)]
        score: f64,
    },

    /// Add a task to an event
    Task {
        /// Event id
        event: String,

        #[arg(long)]
        title: String,

        /// Volunteer id the task is assigned to
        #[arg(long)]
        assign: Option<String>,
    },

    /// Toggle a volunteer's check-in
    Checkin {
        /// Event id
        event: String,
        /// Volunteer id
        volunteer: String,
    },

    /// Raise, approve or reject an event
    Approval {
        /// Event id
        event: String,

        #[arg(value_enum)]
        action: ApprovalAction,
    },

    /// Submit post-event feedback
    Feedback {
        /// Event id
        event: String,

        #[arg(long)]
        name: String,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,

        #[arg(long, default_value = "")]
        comment: String,
    },

    /// Organizer analytics (dashboard) or post-event analytics (--event)
    Metrics {
        #[arg(long)]
        event: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// List the built-in event templates
    Templates,

    /// Print the activity log of the session
    Log,

    /// Start an interactive session reading commands from stdin
    Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalAction {
    /// Send (back) for approval
    Raise,
    Approve,
    Reject,
}
