use crate::calendar::Month;
use crate::models::SpecialDayRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{env, fmt, io};
use tokio::fs;

pub fn resolve_dataset_path() -> PathBuf {
    env::var("SPECIAL_DAYS_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/special-days.json"))
}

/// Dataset fetch/parse failure. Fatal to startup, never retried.
#[derive(Debug)]
pub enum LoadError {
    Read(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read(err) => write!(f, "failed to read dataset: {err}"),
            LoadError::Parse(err) => write!(f, "failed to parse dataset: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read(err) => Some(err),
            LoadError::Parse(err) => Some(err),
        }
    }
}

/// The full set of special day records, indexed by (month, day). Built once
/// at startup and never mutated afterwards.
pub struct Dataset {
    records: Vec<SpecialDayRecord>,
    by_date: HashMap<(Month, u32), usize>,
}

impl Dataset {
    pub fn from_records(records: Vec<SpecialDayRecord>) -> Self {
        let mut by_date = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            // first record wins when a date appears twice
            by_date.entry((record.month, record.day)).or_insert(position);
        }
        Self { records, by_date }
    }

    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = fs::read(path).await.map_err(LoadError::Read)?;
        let records = serde_json::from_slice(&bytes).map_err(LoadError::Parse)?;
        Ok(Self::from_records(records))
    }

    pub fn find_by_date(&self, month: Month, day: u32) -> Option<&SpecialDayRecord> {
        self.by_date
            .get(&(month, day))
            .map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
