use crate::domain::model::{LockerPass, Pass};
use crate::domain::ports::CatalogRepository;
use crate::utils::error::{Result, StudyCafeError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Catalog backed by two header-less CSV files:
/// `TYPE,duration,price,discount_rate` for passes and
/// `TYPE,duration,price` for lockers.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    pass_list: PathBuf,
    locker_list: PathBuf,
}

impl CsvCatalog {
    pub fn new(pass_list: impl Into<PathBuf>, locker_list: impl Into<PathBuf>) -> Self {
        Self {
            pass_list: pass_list.into(),
            locker_list: locker_list.into(),
        }
    }

    async fn read_rows<T: DeserializeOwned + Validate>(path: &Path) -> Result<Vec<T>> {
        tracing::debug!("Reading catalog file: {}", path.display());
        let data = tokio::fs::read(path).await?;
        parse_rows(&data)
    }
}

/// Deserializes every row and rejects the first one with an out-of-range value.
pub fn parse_rows<T: DeserializeOwned + Validate>(data: &[u8]) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(data);

    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()?;

    for (index, row) in rows.iter().enumerate() {
        row.validate()
            .map_err(|e| StudyCafeError::InvalidCatalogEntry {
                entry: index + 1,
                reason: e.to_string(),
            })?;
    }

    Ok(rows)
}

#[async_trait]
impl CatalogRepository for CsvCatalog {
    async fn read_passes(&self) -> Result<Vec<Pass>> {
        Self::read_rows(&self.pass_list).await
    }

    async fn read_locker_passes(&self) -> Result<Vec<LockerPass>> {
        Self::read_rows(&self.locker_list).await
    }
}
