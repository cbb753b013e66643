//! Command-line argument definitions for the diocese importer
//!
//! Defines the CLI surface using the clap derive API: an `import` command
//! that commits parsed records to the store, and an `inspect` command that
//! only parses and reports.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the diocese importer
///
/// Converts a pastoral-zone directory document from flat text into structured
/// zone, parish and staff records held in a generation-swapped JSON store.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "diocese-importer",
    version,
    about = "Convert a pastoral-zone directory from flat text into structured records",
    long_about = "Parses a diocesan pastoral-zone directory document (flat text listing zones, \
                  parishes and clergy staffing lines) into structured records. Imports are \
                  committed as atomic generations of a JSON store; the parser is best-effort, \
                  so every import report deserves a human glance before the result is trusted."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the importer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse directory text and commit the records to the store
    Import(ImportArgs),
    /// Parse directory text and report what was recognized, without writing
    Inspect(InspectArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Directory text to import
    ///
    /// Either a single text file or a directory; directories are scanned
    /// recursively for .txt/.text files, imported in path order.
    #[arg(value_name = "INPUT", help = "Text file or directory of text files")]
    pub input: PathBuf,

    /// Store root directory
    ///
    /// Where generations are committed. Defaults to the configured store
    /// root, or ./store when nothing is configured.
    #[arg(
        short = 'o',
        long = "store",
        value_name = "PATH",
        help = "Store root directory"
    )]
    pub store_path: Option<PathBuf>,

    /// Replace the existing catalog instead of merging into it
    ///
    /// By default an import upserts zones by identifier and keeps unrelated
    /// zones. With this flag the new generation holds only what this import
    /// parsed.
    #[arg(
        long = "replace",
        help = "Replace the existing catalog instead of merging"
    )]
    pub replace: bool,

    /// Parse and report without committing a generation
    #[arg(long = "dry-run", help = "Show what would be imported without writing")]
    pub dry_run: bool,

    /// Code prefix for zone records
    #[arg(
        long = "zone-prefix",
        value_name = "PREFIX",
        help = "Code prefix for zone records (default ZP)"
    )]
    pub zone_prefix: Option<String>,

    /// Code prefix for parish records
    #[arg(
        long = "parish-prefix",
        value_name = "PREFIX",
        help = "Code prefix for parish records (default PA)"
    )]
    pub parish_prefix: Option<String>,

    /// Path to configuration file
    ///
    /// TOML configuration for store and identifier settings. If not
    /// specified, looks for the file under the user configuration directory.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Directory text to inspect
    #[arg(value_name = "INPUT", help = "Text file or directory of text files")]
    pub input: PathBuf,

    /// Include every parish and staff entry in the report
    ///
    /// By default the report shows per-zone counts only.
    #[arg(long = "detailed", help = "List parishes and staff, not just counts")]
    pub detailed: bool,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ImportArgs {
    /// Validate the import command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn import_args(input: PathBuf) -> ImportArgs {
        ImportArgs {
            input,
            store_path: None,
            replace: false,
            dry_run: false,
            zone_prefix: None,
            parish_prefix: None,
            config_file: None,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }

    #[test]
    fn test_import_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("annuaire.txt");
        std::fs::write(&input, "ZONE PASTORALE D'AKONO\n1.  AKONO\n").unwrap();

        let args = import_args(input.clone());
        assert!(args.validate().is_ok());

        // Nonexistent input path
        let mut invalid = args.clone();
        invalid.input = PathBuf::from("/nonexistent/annuaire.txt");
        assert!(invalid.validate().is_err());

        // Nonexistent config file
        let mut invalid = args.clone();
        invalid.config_file = Some(PathBuf::from("/nonexistent/config.toml"));
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().to_path_buf();

        let mut args = import_args(input);
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = import_args(temp_dir.path().to_path_buf());

        assert!(args.show_progress());
        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_cli_parses_import_invocation() {
        let args = Args::parse_from([
            "diocese-importer",
            "import",
            "annuaire.txt",
            "--replace",
            "--zone-prefix",
            "ZONE",
            "-vv",
        ]);

        match args.get_command() {
            Commands::Import(import) => {
                assert_eq!(import.input, PathBuf::from("annuaire.txt"));
                assert!(import.replace);
                assert_eq!(import.zone_prefix.as_deref(), Some("ZONE"));
                assert_eq!(import.verbose, 2);
            }
            other => panic!("expected import command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_inspect_invocation() {
        let args = Args::parse_from([
            "diocese-importer",
            "inspect",
            "annuaire.txt",
            "--detailed",
            "--output-format",
            "json",
        ]);

        match args.get_command() {
            Commands::Inspect(inspect) => {
                assert!(inspect.detailed);
                assert_eq!(inspect.output_format, OutputFormat::Json);
            }
            other => panic!("expected inspect command, got {:?}", other),
        }
    }
}
