use clap::{ArgAction, Parser, Subcommand};

/// quickargs: argument helpers for shell scripts.
/// Expands filename wildcards and checks leftover command-line options.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Show config file path and content, then exit
    #[arg(short, long)]
    pub config: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand wildcard patterns into existing files, one per line
    Resolve {
        /// Wildcard patterns, e.g. "*.png" (quote them so the shell does not expand them)
        patterns: Vec<String>,

        /// Accepted extension, e.g. ".png"; repeatable. Defaults to the config file's list
        #[arg(short, long = "ext")]
        ext: Vec<String>,

        /// Sort the output lexicographically
        #[arg(short, long)]
        sort: bool,

        /// Also print each file's basename, tab separated
        #[arg(long)]
        basenames: bool,

        /// Save the given --ext values as the default filter
        #[arg(long)]
        remember: bool,
    },

    /// Consume known flags from ARGS, then fail on any leftover "--" option
    Check {
        /// Flag to look for, e.g. "--verbose"; repeatable
        #[arg(short, long = "flag", allow_hyphen_values = true)]
        flag: Vec<String>,

        /// Arguments to check, given after "--"
        #[arg(last = true)]
        args: Vec<String>,
    },
}
