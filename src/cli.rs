use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wager-cost", version, about = "Monthly cloud cost estimator for a social betting app")]
pub struct Cli {
    /// Optional TOML file overriding prices, assumptions and scenarios
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print cost projections for every scenario (default)
    Table {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },

    /// Estimate cost for a single user/bet volume
    Estimate {
        /// Number of users
        #[arg(short, long, allow_negative_numbers = true)]
        users: i64,

        /// Bets created per month
        #[arg(short, long, allow_negative_numbers = true)]
        bets: i64,

        /// Share of users wagering on each bet (defaults to the configured rate)
        #[arg(short, long, allow_negative_numbers = true)]
        participation_rate: Option<f64>,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Pretty,
    Json,
}

impl Cli {
    /// Get the command to execute, defaulting to the markdown table
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Table {
            format: OutputFormat::Markdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_markdown_table() {
        let cli = Cli {
            config: None,
            command: None,
        };

        match cli.get_command() {
            Commands::Table { format } => assert_eq!(format, OutputFormat::Markdown),
            _ => panic!("Expected Table command"),
        }
    }

    #[test]
    fn test_cli_parsing_table_pretty() {
        let args = vec!["wager-cost", "table", "--format", "pretty"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Table { format } => assert_eq!(format, OutputFormat::Pretty),
            _ => panic!("Expected Table command"),
        }
    }

    #[test]
    fn test_cli_parsing_estimate_accepts_negative_users() {
        let args = vec!["wager-cost", "estimate", "--users", "-5", "--bets", "10"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Estimate {
                users,
                bets,
                participation_rate,
                json,
            } => {
                assert_eq!(users, -5);
                assert_eq!(bets, 10);
                assert!(participation_rate.is_none());
                assert!(!json);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_global_config() {
        let args = vec!["wager-cost", "config", "validate", "--config", "prices.toml"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("prices.toml")));
        assert!(matches!(
            cli.get_command(),
            Commands::Config {
                action: ConfigCommands::Validate
            }
        ));
    }
}
