//! CLI module - Command-line interface for noirdb
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Film Noir Thematic Database
/// Browse films, themes and stills from flat JSON data files
#[derive(Parser)]
#[command(name = "noirdb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default search locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the website (default)
    #[command(alias = "web")]
    Serve,

    /// Attach film titles to themes and write the joined theme file
    #[command(alias = "join")]
    JoinThemes {
        /// Film collection (defaults to data.films_file)
        #[arg(long)]
        films: Option<PathBuf>,
        /// Curated themes (defaults to data.themes_file)
        #[arg(long)]
        themes: Option<PathBuf>,
        /// Output file (defaults to data.theme_films_file)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Load every data file and report dangling references
    Check,

    /// Create default config file
    Init,
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_join_overrides() {
        let cli = Cli::try_parse_from([
            "noirdb",
            "join-themes",
            "--films",
            "data/films.json",
            "--out",
            "out.json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::JoinThemes { films, themes, out }) => {
                assert_eq!(films, Some(PathBuf::from("data/films.json")));
                assert!(themes.is_none());
                assert_eq!(out, Some(PathBuf::from("out.json")));
            }
            _ => panic!("expected join-themes"),
        }
    }

    #[test]
    fn test_no_subcommand_and_global_config() {
        let cli = Cli::try_parse_from(["noirdb", "--config", "site.toml"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));

        let cli = Cli::try_parse_from(["noirdb", "check", "--config", "site.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
    }
}
