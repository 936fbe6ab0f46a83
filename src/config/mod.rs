pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_catalog_file, Validate};
use clap::Parser;
use toml_config::TomlConfig;

pub const DEFAULT_PASS_LIST: &str = "data/pass-list.csv";
pub const DEFAULT_LOCKER_LIST: &str = "data/locker.csv";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "study-cafe")]
#[command(about = "Order a study cafe pass from the console")]
pub struct CliConfig {
    /// CSV file with the pass catalog
    #[arg(long)]
    pub pass_list: Option<String>,

    /// CSV file with the locker catalog
    #[arg(long)]
    pub locker_list: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Settings after merging flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub pass_list: String,
    pub locker_list: String,
    pub verbose: bool,
    pub log_json: bool,
}

impl CliConfig {
    pub fn load(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(self.merge(&file))
    }

    /// Loads and validates; every startup configuration failure leaves here.
    pub fn resolve(&self) -> Result<AppConfig> {
        let config = self.load()?;
        config.validate()?;
        Ok(config)
    }

    pub fn merge(&self, file: &TomlConfig) -> AppConfig {
        AppConfig {
            pass_list: self
                .pass_list
                .clone()
                .or_else(|| file.pass_list().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_PASS_LIST.to_string()),
            locker_list: self
                .locker_list
                .clone()
                .or_else(|| file.locker_list().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_LOCKER_LIST.to_string()),
            verbose: self.verbose || file.verbose(),
            log_json: self.log_json || file.json_logs(),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_catalog_file("pass_list", &self.pass_list)?;
        validate_catalog_file("locker_list", &self.locker_list)?;
        Ok(())
    }
}
