//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::{net::IpAddr, path::PathBuf};

/// folio portfolio content engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve content as JSON, with password-gated work items
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<IpAddr>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,

        /// Mark auth cookies as `Secure`
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        production: Option<bool>,
    },

    /// List all work, featured first
    Work,

    /// List the items of a content type or sub-type
    List {
        /// Content type slug (e.g. `work`, `now`)
        category: String,

        /// Sub-type slug (e.g. `products`)
        sub: Option<String>,
    },

    /// Show one work item with its neighbours
    Show {
        /// Work sub-type slug (e.g. `products`)
        sub: String,

        /// Item slug
        slug: String,
    },

    /// Print every route derived from the content taxonomy
    Routes,

    /// Print the SHA-256 hash of a password, for `WORK_*_PASSWORD` variables
    Hash {
        /// Plain-text password
        password: String,
    },

    /// Parse every content file and report the ones that fail
    Check,
}

impl Cli {
    /// Whether the command needs the content directory on disk.
    pub const fn reads_content(&self) -> bool {
        !matches!(self.command, Commands::Routes | Commands::Hash { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["folio", "show", "products", "ocean"]);
        match cli.command {
            Commands::Show { sub, slug } => {
                assert_eq!(sub, "products");
                assert_eq!(slug, "ocean");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::parse_from(["folio", "serve", "-i", "0.0.0.0", "-p", "8080", "--production"]);
        match cli.command {
            Commands::Serve {
                interface,
                port,
                production,
            } => {
                assert_eq!(interface, Some(IpAddr::from([0, 0, 0, 0])));
                assert_eq!(port, Some(8080));
                assert_eq!(production, Some(true));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_reads_content() {
        assert!(!Cli::parse_from(["folio", "hash", "secret"]).reads_content());
        assert!(!Cli::parse_from(["folio", "routes"]).reads_content());
        assert!(Cli::parse_from(["folio", "work"]).reads_content());
    }

    #[test]
    fn test_parse_serve_rejects_bad_interface() {
        assert!(Cli::try_parse_from(["folio", "serve", "-i", "localhost"]).is_err());
    }
}
