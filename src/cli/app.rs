use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::search::SearchField;

/// Patternbook: browse a pattern catalog and walk through its tutorials
#[derive(Parser, Debug)]
#[command(name = "patternbook")]
#[command(version)]
#[command(about = "Browse a pattern catalog and walk through its tutorials")]
#[command(
    long_about = "Patternbook reads a static JSON catalog of patterns, lists and searches it, and walks through each pattern's tutorial one step at a time."
)]
pub struct Cli {
    /// Catalog data file or http(s) URL (overrides config and PATTERNBOOK_DATA)
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Configuration file (defaults to ./patternbook.yaml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog items, optionally filtered by a search query
    Gallery {
        /// Search query (case-insensitive substring)
        query: Option<String>,

        /// Field to search (repeatable; defaults to the configured fields)
        #[arg(short, long = "field", value_enum)]
        fields: Vec<SearchField>,

        /// Output rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the details of one item
    Show {
        /// Item identifier
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through an item's tutorial step by step
    Walk {
        /// Item identifier
        id: String,

        /// Read n/p/q commands from stdin instead of opening the terminal UI
        #[arg(long)]
        plain: bool,

        /// Print each step as a JSON line (implies --plain)
        #[arg(long)]
        json: bool,
    },

    /// Resolve a page location such as `working.html?id=teddy`
    Open {
        /// Page location; the `id` query parameter selects an item
        location: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive gallery and tutorial browser
    #[cfg(feature = "tui")]
    Browse,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Gallery { .. } => "gallery",
            Commands::Show { .. } => "show",
            Commands::Walk { .. } => "walk",
            Commands::Open { .. } => "open",
            #[cfg(feature = "tui")]
            Commands::Browse => "browse",
        }
    }

    /// Whether the command reads from stdin or the terminal
    pub fn is_interactive(&self) -> bool {
        match self {
            Commands::Walk { .. } => true,
            #[cfg(feature = "tui")]
            Commands::Browse => true,
            _ => false,
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_gallery_parsing() {
        let cli = Cli::parse_from([
            "patternbook",
            "gallery",
            "bear",
            "--field",
            "name",
            "-f",
            "category",
            "--json",
        ]);

        match cli.command {
            Commands::Gallery { query, fields, json } => {
                assert_eq!(query.as_deref(), Some("bear"));
                assert_eq!(fields, vec![SearchField::Name, SearchField::Category]);
                assert!(json);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_gallery_defaults() {
        let cli = Cli::parse_from(["patternbook", "gallery"]);

        match cli.command {
            Commands::Gallery { query, fields, json } => {
                assert_eq!(query, None);
                assert!(fields.is_empty());
                assert!(!json);
            }
            _ => panic!("Wrong command parsed"),
        }
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.data, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "patternbook",
            "show",
            "teddy",
            "--data",
            "catalog.json",
            "--log-level",
            "debug",
        ]);

        assert_eq!(cli.data.as_deref(), Some("catalog.json"));
        assert_eq!(cli.log_level, LogLevel::Debug);
        match cli.command {
            Commands::Show { id, json } => {
                assert_eq!(id, "teddy");
                assert!(!json);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_walk_command() {
        let cli = Cli::parse_from(["patternbook", "walk", "teddy", "--plain"]);

        match cli.command {
            Commands::Walk { id, plain, json } => {
                assert_eq!(id, "teddy");
                assert!(plain);
                assert!(!json);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_open_command() {
        let cli = Cli::parse_from(["patternbook", "open", "working.html?id=teddy"]);

        match cli.command {
            Commands::Open { location, json } => {
                assert_eq!(location, "working.html?id=teddy");
                assert!(!json);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_command_properties() {
        let walk = Commands::Walk {
            id: "teddy".to_string(),
            plain: false,
            json: false,
        };
        assert_eq!(walk.name(), "walk");
        assert!(walk.is_interactive());

        let gallery = Commands::Gallery {
            query: None,
            fields: vec![],
            json: false,
        };
        assert_eq!(gallery.name(), "gallery");
        assert!(!gallery.is_interactive());
    }

    #[test]
    fn test_log_level_directives() {
        assert_eq!(LogLevel::Error.to_filter_directive(), "error");
        assert_eq!(LogLevel::Trace.to_filter_directive(), "trace");
    }
}
