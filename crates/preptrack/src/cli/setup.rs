use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with git hash and commit date on non-release builds.
/// Release: "v0.3.2". Dev: "v0.3.2\ndev: abc1234 2024-01-15 14:30".
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "preptrack",
    bin_name = "preptrack",
    version = get_version(),
    disable_help_subcommand = true,
    about = "Track your progress through an interview-preparation curriculum",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (overrides PREPTRACK_DATA)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List learning items with their completion marks
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only items in this category (e.g. sorting)
        #[arg(short, long)]
        category: Option<String>,

        /// Only items not completed yet
        #[arg(long)]
        pending: bool,
    },

    /// Flip the completion state of items
    #[command(alias = "t", display_order = 2)]
    Toggle {
        /// Item ids (e.g. 3 5 or 1-4)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Mark items as completed
    #[command(alias = "done", display_order = 3)]
    Complete {
        /// Item ids (e.g. 3 5 or 1-4)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Mark items as not completed
    #[command(display_order = 4)]
    Reopen {
        /// Item ids (e.g. 3 5 or 1-4)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show overall and per-category progress
    #[command(alias = "st", display_order = 10)]
    Status {
        /// Only this category
        category: Option<String>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the curriculum categories
    #[command(display_order = 11)]
    Categories,

    /// Show the recommended study roadmap
    #[command(display_order = 12)]
    Roadmap {
        /// Include per-phase tips, resources and general study advice
        #[arg(long)]
        tips: bool,
    },

    /// Export progress as JSON or Markdown
    #[command(display_order = 20)]
    Export {
        /// Output format: json or markdown (md)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Destination file (defaults to coding-interview-progress.<ext>)
        #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },

    /// Clear all progress
    #[command(display_order = 21)]
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show configuration
    #[command(display_order = 30)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print a commented preptrack.toml template
    Gen,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("preptrack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn naked_invocation_has_no_command() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn toggle_collects_ids() {
        match parse(&["toggle", "1-3", "7"]).command {
            Some(Commands::Toggle { ids }) => assert_eq!(ids, vec!["1-3", "7"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn toggle_requires_ids() {
        assert!(Cli::try_parse_from(["preptrack", "toggle"]).is_err());
    }

    #[test]
    fn aliases() {
        assert!(matches!(parse(&["ls"]).command, Some(Commands::List { .. })));
        assert!(matches!(
            parse(&["done", "4"]).command,
            Some(Commands::Complete { .. })
        ));
        assert!(matches!(
            parse(&["st"]).command,
            Some(Commands::Status { .. })
        ));
    }

    #[test]
    fn export_defaults_to_json_file() {
        match parse(&["export"]).command {
            Some(Commands::Export {
                format,
                output,
                stdout,
            }) => {
                assert_eq!(format, "json");
                assert!(output.is_none());
                assert!(!stdout);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn export_output_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["preptrack", "export", "-o", "x.md", "--stdout"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["status", "--data", "/tmp/prep", "-v"]);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/prep")));
        assert!(cli.verbose);
    }

    #[test]
    fn config_gen() {
        assert!(matches!(
            parse(&["config", "gen"]).command,
            Some(Commands::Config {
                action: Some(ConfigCommands::Gen)
            })
        ));
    }
}
