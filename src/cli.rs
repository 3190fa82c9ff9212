//! Command line interface for trust-lens

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::config::EngineProvider;

/// Command line arguments for trust-lens
#[derive(Parser, Debug)]
#[command(name = "trust-lens")]
#[command(version = "1.0.0")]
#[command(about = "Turn marketplace reviews into explainable product trust scores", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the REST API server
    Serve {
        /// Listen address as HOST:PORT (default: 0.0.0.0:8001)
        #[arg(short, long)]
        bind: Option<SocketAddr>,

        /// SQLite database file (default: trust_lens.db)
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Config file path (default: ./trust-lens.config.yml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Analysis engine: lexicon or gemini
        #[arg(short, long)]
        engine: Option<EngineProvider>,
    },

    /// Analyze one product and print the report
    Analyze {
        /// Product name
        #[arg(short, long)]
        name: Option<String>,

        /// Product listing URL
        #[arg(short, long)]
        url: Option<String>,

        /// Product description
        #[arg(long)]
        description: Option<String>,

        /// Output format: json or markdown
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Analysis engine: lexicon or gemini
        #[arg(short, long)]
        engine: Option<EngineProvider>,
    },
}

impl Args {
    /// Parses command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults_leave_options_unset() {
        let args = Args::try_parse_from(["trust-lens", "serve"]).unwrap();

        match args.command {
            Command::Serve {
                bind,
                database,
                config,
                engine,
            } => {
                assert!(bind.is_none());
                assert!(database.is_none());
                assert!(config.is_none());
                assert!(engine.is_none());
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_flags_parse() {
        let args = Args::try_parse_from([
            "trust-lens",
            "serve",
            "--bind",
            "127.0.0.1:9000",
            "--database",
            "scores.db",
            "--engine",
            "gemini",
        ])
        .unwrap();

        match args.command {
            Command::Serve {
                bind,
                database,
                engine,
                ..
            } => {
                assert_eq!(bind.unwrap().to_string(), "127.0.0.1:9000");
                assert_eq!(database.unwrap(), PathBuf::from("scores.db"));
                assert_eq!(engine.unwrap(), EngineProvider::Gemini);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_analyze_defaults_to_json() {
        let args =
            Args::try_parse_from(["trust-lens", "analyze", "--name", "Wireless Mouse"]).unwrap();

        match args.command {
            Command::Analyze {
                name,
                format,
                output,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("Wireless Mouse"));
                assert_eq!(format, OutputFormat::Json);
                assert!(output.is_none());
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_analyze_markdown_to_file() {
        let args = Args::try_parse_from([
            "trust-lens",
            "analyze",
            "--url",
            "https://example.com/p/1",
            "--format",
            "markdown",
            "--output",
            "report.md",
        ])
        .unwrap();

        match args.command {
            Command::Analyze {
                url,
                format,
                output,
                ..
            } => {
                assert_eq!(url.as_deref(), Some("https://example.com/p/1"));
                assert_eq!(format, OutputFormat::Markdown);
                assert_eq!(output.unwrap(), PathBuf::from("report.md"));
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_invalid_engine_is_rejected() {
        let result = Args::try_parse_from(["trust-lens", "serve", "--engine", "llama"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["trust-lens", "analyze", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        let result = Args::try_parse_from(["trust-lens"]);
        assert!(result.is_err());
    }
}
