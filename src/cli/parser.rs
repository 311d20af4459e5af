use clap::{Parser, Subcommand};

/// Command-line interface definition for presenza
/// CLI front end for the attendance capture and time-aggregation engine
#[derive(Parser)]
#[command(
    name = "presenza",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check in and out against a remote attendance API and review daily, weekly and monthly work-time statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the attendance API base URL (useful for tests)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable diagnostic logging
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init {
        /// Attendance API base URL to store in the config
        #[arg(long = "api-url")]
        api_url: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record attendance: checks in or out depending on today's events
    Capture {
        /// Work mode (O = Office, H = Hybrid, R = Remote)
        #[arg(long = "mode", help = "Work mode: O=Office, H=Hybrid, R=Remote")]
        mode: Option<String>,

        /// Path of the still frame to attach as the attendance photo
        #[arg(long = "photo", conflicts_with = "no_photo")]
        photo: Option<String>,

        /// Skip the camera entirely
        #[arg(long = "no-photo")]
        no_photo: bool,

        /// Skip the location fix
        #[arg(long = "no-location")]
        no_location: bool,
    },

    /// Show the attendance record for one day
    Day {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Weekly summary for a Monday-anchored window
    Week {
        /// Week offset from the current week (0 = current, -1 = last, 1 = next)
        #[arg(long = "offset", default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },

    /// Monthly calendar with per-day intensity buckets
    Month {
        #[arg(long = "year", requires = "month")]
        year: Option<i32>,

        /// Calendar month 1-12
        #[arg(long = "month", requires = "year")]
        month: Option<u32>,
    },

    /// List company holidays
    Holidays,
}
