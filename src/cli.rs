//! Command-line definitions for both binaries.
//!
//! Kept in the library so parsing can be exercised from tests.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser};

use crate::config::{
    LogFormat, LogLevel, OutputFormat, ScraperConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_WEB_HOST, DEFAULT_WEB_PORT, MAX_REDIRECT_HOPS,
};
use crate::dates::DateSelector;

/// Options shared by the command-line and web binaries.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Portal root URL
    #[arg(long, env = "ECOURTS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "ECOURTS_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Directory for result files and downloaded documents
    #[arg(long, env = "ECOURTS_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl CommonArgs {
    pub fn scraper_config(&self) -> ScraperConfig {
        ScraperConfig {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            max_redirects: MAX_REDIRECT_HOPS,
            output_dir: self.output_dir.clone(),
            ..Default::default()
        }
    }
}

/// eCourts India case scraper
#[derive(Debug, Parser)]
#[command(name = "ecourts_scraper", version, about = "eCourts India case scraper")]
#[command(group(ArgGroup::new("mode").required(true).args(["cnr", "case", "causelist"])))]
pub struct Cli {
    /// Search by CNR number
    #[arg(long, value_name = "CNR")]
    pub cnr: Option<String>,

    /// Search by case type, number, and year
    #[arg(long, num_args = 3, value_names = ["TYPE", "NUMBER", "YEAR"])]
    pub case: Option<Vec<String>>,

    /// Download today's cause list
    #[arg(long)]
    pub causelist: bool,

    /// Check for today's hearings (default)
    #[arg(long)]
    pub today: bool,

    /// Check for tomorrow's hearings
    #[arg(long)]
    pub tomorrow: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// The one operation a command-line invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Cnr(String),
    Case {
        case_type: String,
        case_number: String,
        year: String,
    },
    CauseList,
}

impl Cli {
    /// Resolves the mutually exclusive mode flags.
    pub fn mode(&self) -> Mode {
        if let Some(cnr) = &self.cnr {
            return Mode::Cnr(cnr.clone());
        }
        match self.case.as_deref() {
            Some([case_type, case_number, year]) => Mode::Case {
                case_type: case_type.clone(),
                case_number: case_number.clone(),
                year: year.clone(),
            },
            _ => Mode::CauseList,
        }
    }

    /// `--tomorrow` wins over `--today`; neither means today.
    pub fn date_selector(&self) -> DateSelector {
        if self.tomorrow {
            DateSelector::Tomorrow
        } else {
            DateSelector::Today
        }
    }
}

/// eCourts India case scraper web API
#[derive(Debug, Parser)]
#[command(name = "ecourts_web", version, about = "eCourts India case scraper web API")]
pub struct WebCli {
    /// Address to bind
    #[arg(long, env = "ECOURTS_WEB_HOST", default_value = DEFAULT_WEB_HOST)]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "ECOURTS_WEB_PORT", default_value_t = DEFAULT_WEB_PORT)]
    pub port: u16,

    #[command(flatten)]
    pub common: CommonArgs,
}
