use clap::{Parser, Subcommand};

/// Command-line interface definition for deepweek
/// CLI application to estimate how meetings erode deep work time
#[derive(Parser)]
#[command(
    name = "deepweek",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple deep-work calculator: estimate how meetings and context switching erode your week",
    long_about = None
)]
pub struct Cli {
    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Analyse a week's meeting load against a deep-work target
    Analyze {
        /// Date inside the week to analyse (YYYY-MM-DD, default: today)
        date: Option<String>,

        /// Usual working hours in the week (0 = use configured default;
        /// an 8 hour day excluding lunch = 40 hours per week)
        #[arg(long = "hours", default_value_t = 0.0)]
        hours: f64,

        /// Required deep-work proportion of the week (%)
        #[arg(long = "target", value_parser = clap::value_parser!(u32).range(0..=100), default_value_t = 0)]
        target: u32,

        /// Total time spent in meetings (hours)
        #[arg(long = "meeting-hours", default_value_t = 0.0)]
        meeting_hours: f64,

        /// Total number of meetings
        #[arg(long = "meetings", default_value_t = 0)]
        meetings: u32,

        /// Total number of meeting blocks (back-to-back runs separated
        /// by no more than ~5 minutes; you should have fewer blocks
        /// than meetings)
        #[arg(long = "blocks", default_value_t = 0)]
        blocks: u32,

        /// Cost of context switching in minutes (the average is around
        /// 22 and varies with the type of task)
        #[arg(long = "switch-cost", default_value_t = 0.0)]
        switch_cost: f64,

        /// Print the full report as JSON instead of the human rendering
        #[arg(long = "json")]
        json: bool,
    },
}
