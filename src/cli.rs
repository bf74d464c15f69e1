use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::commands::Overrides;
use crate::search::{SearchMode, VALID_SEARCH_MODES};

#[derive(Parser)]
#[command(name = "postdeck")]
#[command(about = "Browse posts, authors, and comments from a JSON API")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: GlobalArgs,

    /// Defaults to `browse`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Per-run configuration overrides
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// API root (overrides config and POSTDECK_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Posts per page (overrides config)
    #[arg(long, global = true, value_parser = parse_page_size)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive browser
    #[command(visible_alias = "b")]
    Browse,

    /// Render one page of posts and exit
    #[command(visible_alias = "ls")]
    List {
        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: usize,

        /// Search query
        #[arg(short, long, default_value = "")]
        query: String,

        /// Search mode: title, full, fuzzy (default: from config)
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<SearchMode>,

        /// Mark posts with long bodies
        #[arg(long)]
        highlight_long: bool,

        /// Hide posts by the configured authors
        #[arg(long)]
        hide_by_user: bool,

        /// Order the page by comment count, most first
        #[arg(long)]
        sort_by_comments: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post with its author and comments
    #[command(visible_alias = "s")]
    Show {
        /// Post ID
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location
    Path,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g. page_size, hidden_user_ids)
        key: String,
        /// New value
        value: String,
    },
}

impl Cli {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            ListOptions, cmd_browse, cmd_config_path, cmd_config_set, cmd_config_show, cmd_list,
            cmd_show,
        };

        let overrides = Overrides {
            base_url: self.overrides.base_url,
            page_size: self.overrides.page_size,
        };

        match self.command.unwrap_or(Commands::Browse) {
            Commands::Browse => cmd_browse(&overrides).await,

            Commands::List {
                page,
                query,
                mode,
                highlight_long,
                hide_by_user,
                sort_by_comments,
                json,
            } => {
                cmd_list(
                    &overrides,
                    ListOptions {
                        page,
                        query,
                        mode,
                        highlight_long,
                        hide_by_user,
                        sort_by_comments,
                        json,
                    },
                )
                .await
            }

            Commands::Show { id, json } => cmd_show(&overrides, id, json).await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(&overrides, json),
                ConfigAction::Path => cmd_config_path(),
                ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_mode(s: &str) -> Result<SearchMode, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid search mode. Must be one of: {}",
            VALID_SEARCH_MODES.join(", ")
        )
    })
}

fn parse_page(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err("Page must be a whole number of at least 1".to_string()),
    }
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err("Page size must be a whole number of at least 1".to_string()),
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "postdeck", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_browse() {
        let cli = Cli::try_parse_from(["postdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_flags() {
        let cli = Cli::try_parse_from([
            "postdeck",
            "--page-size",
            "5",
            "list",
            "--page",
            "3",
            "-q",
            "hello",
            "--mode",
            "FUZZY",
            "--hide-by-user",
        ])
        .unwrap();
        assert_eq!(cli.overrides.page_size, Some(5));
        match cli.command {
            Some(Commands::List {
                page,
                query,
                mode,
                hide_by_user,
                highlight_long,
                ..
            }) => {
                assert_eq!(page, 3);
                assert_eq!(query, "hello");
                assert_eq!(mode, Some(SearchMode::Fuzzy));
                assert!(hide_by_user);
                assert!(!highlight_long);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["postdeck", "show", "7", "--base-url", "http://x"]).unwrap();
        assert_eq!(cli.overrides.base_url.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_rejects_page_zero_and_bad_mode() {
        assert!(Cli::try_parse_from(["postdeck", "list", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["postdeck", "list", "--mode", "regex"]).is_err());
        assert!(Cli::try_parse_from(["postdeck", "--page-size", "0", "list"]).is_err());
    }

    #[test]
    fn test_parse_mode_message() {
        let err = parse_mode("nope").unwrap_err();
        assert_eq!(err, "Invalid search mode. Must be one of: title, full, fuzzy");
    }
}
