pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{
    catalog::CsvCatalog,
    console::{ConsoleInput, ConsoleOutput},
};
pub use config::{AppConfig, CliConfig};
pub use core::machine::PassMachine;
pub use domain::model::{LockerPass, OrderOutcome, Pass, PassType};
pub use utils::error::{Result, StudyCafeError};
