pub mod palette;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::Palette;
use chrono::Duration;

pub const DEFAULT_DATASET_URL: &str = "https://raw.githubusercontent.com/GOcampusRedingenhof/lessenrooster/refs/heads/main/lessentabellen_tabel.csv";
pub const DEFAULT_CACHE_DIR: &str = "./.lessentabellen";
pub const DEFAULT_CACHE_TTL_MINUTES: i64 = 60;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::app::export::ExportFormat;
    use crate::utils::error::Result;
    use crate::core::cache::default_expiry;
    use crate::utils::validation::{validate_minutes, validate_path, validate_url, Validate};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "lessentabellen")]
    #[command(about = "Browse the weekly lesson tables of the school's study programs")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_DATASET_URL)]
        pub source_url: String,

        #[arg(long, default_value = DEFAULT_CACHE_DIR)]
        pub cache_dir: String,

        #[arg(long, default_value_t = DEFAULT_CACHE_TTL_MINUTES)]
        pub cache_ttl_minutes: i64,

        #[arg(long, help = "Keep the dataset in memory only")]
        pub no_cache: bool,

        #[arg(long, help = "TOML configuration file; replaces the source and cache flags")]
        pub config: Option<String>,

        #[arg(long, help = "Try the load once more when the first attempt fails")]
        pub retry: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log as JSON lines on stderr")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Print the program menu grouped by domain, grade and track
        Menu {
            #[arg(long)]
            json: bool,
        },
        /// Show the lesson table of one program
        Show {
            /// Deep link such as `#tweede-graad-wetenschappen`
            fragment: Option<String>,
            #[arg(long, help = "tweede-graad or derde-graad")]
            grade: Option<String>,
            #[arg(long, help = "Program name or slug")]
            program: Option<String>,
            #[arg(long)]
            json: bool,
        },
        /// Write the lesson table of one program to a file
        Export {
            fragment: String,
            #[arg(long, value_enum, default_value = "csv")]
            format: ExportFormat,
            #[arg(long)]
            output: String,
        },
    }

    impl ConfigProvider for CliConfig {
        fn dataset_url(&self) -> &str {
            &self.source_url
        }

        fn cache_dir(&self) -> &str {
            &self.cache_dir
        }

        fn cache_expiry(&self) -> Duration {
            Duration::try_minutes(self.cache_ttl_minutes).unwrap_or_else(default_expiry)
        }

        fn cache_enabled(&self) -> bool {
            !self.no_cache
        }

        fn palette(&self) -> Palette {
            super::palette::default_palette()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("source_url", &self.source_url)?;
            if !self.no_cache {
                validate_path("cache_dir", &self.cache_dir)?;
            }
            validate_minutes("cache_ttl_minutes", self.cache_ttl_minutes)?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["lessentabellen", "menu"]);

            assert_eq!(config.dataset_url(), DEFAULT_DATASET_URL);
            assert_eq!(config.cache_expiry(), Duration::hours(1));
            assert!(config.cache_enabled());
            assert!(config.validate().is_ok());
            assert!(matches!(config.command, Command::Menu { json: false }));
        }

        #[test]
        fn test_export_arguments() {
            let config = CliConfig::parse_from([
                "lessentabellen",
                "--no-cache",
                "export",
                "#derde-graad-latijn",
                "--format",
                "tsv",
                "--output",
                "latijn.tsv",
            ]);

            assert!(!config.cache_enabled());
            match config.command {
                Command::Export { fragment, format, output } => {
                    assert_eq!(fragment, "#derde-graad-latijn");
                    assert_eq!(format, ExportFormat::Tsv);
                    assert_eq!(output, "latijn.tsv");
                }
                other => panic!("unexpected command: {:?}", other),
            }
        }

        #[test]
        fn test_invalid_ttl_fails_validation() {
            let config =
                CliConfig::parse_from(["lessentabellen", "--cache-ttl-minutes", "0", "menu"]);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_huge_ttl_fails_validation() {
            let config = CliConfig::parse_from([
                "lessentabellen",
                "--cache-ttl-minutes",
                "9223372036854775807",
                "menu",
            ]);
            assert!(matches!(
                config.validate(),
                Err(crate::LessenError::InvalidConfigValueError { .. })
            ));
        }
    }
}
