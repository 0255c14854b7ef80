//! In-memory job catalog: the dataset loaded once at startup, with every
//! skills field normalized and its skill set precomputed.
//!
//! The catalog is read-only after construction and shared through `Arc`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::errors::CatalogError;
use crate::matching::SkillSet;
use crate::models::job::{JobRecord, RawJobRecord};

#[derive(Debug, Default)]
pub struct JobCatalog {
    jobs: Vec<JobRecord>,
    skill_sets: Vec<SkillSet>,
}

/// JSON datasets may be a bare array or wrapped as `{"jobs": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDataset {
    Rows(Vec<RawJobRecord>),
    Wrapped { jobs: Vec<RawJobRecord> },
}

impl JobCatalog {
    /// Normalizes every record and builds its skill set. Order is preserved.
    pub fn from_records(records: Vec<RawJobRecord>) -> Self {
        let jobs: Vec<JobRecord> = records.into_iter().map(JobRecord::from).collect();
        let skill_sets = jobs
            .iter()
            .map(|job| SkillSet::from_normalized(&job.skills))
            .collect();
        JobCatalog { jobs, skill_sets }
    }

    /// Reads a `.json` or `.csv` dataset from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        info!("Loading job dataset from {}", path.display());

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let records = match extension.as_str() {
            "json" => match serde_json::from_reader::<_, JsonDataset>(reader)? {
                JsonDataset::Rows(rows) => rows,
                JsonDataset::Wrapped { jobs } => jobs,
            },
            "csv" => {
                let mut rdr = csv::Reader::from_reader(reader);
                rdr.deserialize::<RawJobRecord>()
                    .collect::<Result<Vec<_>, _>>()?
            }
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        let catalog = Self::from_records(records);
        info!("Job catalog ready: {} records", catalog.len());
        Ok(catalog)
    }

    /// Jobs in dataset order, each paired with its skill set.
    pub fn iter(&self) -> impl Iterator<Item = (&JobRecord, &SkillSet)> {
        self.jobs.iter().zip(self.skill_sets.iter())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
