use serde::{Deserialize, Serialize};

use crate::matching::normalize::normalize_skills;

/// A job row exactly as it appears in the dataset file, before cleaning.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJobRecord {
    pub job_title: String,
    pub location: String,
    pub job_type: String,
    #[serde(default)]
    pub min_budget: Option<f64>,
    #[serde(default)]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub skills: Option<String>,
}

/// A cleaned job posting. `skills` is always in normalized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub job_title: String,
    pub location: String,
    pub job_type: String,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
    pub skills: String,
}

impl From<RawJobRecord> for JobRecord {
    fn from(raw: RawJobRecord) -> Self {
        let skills = normalize_skills(raw.skills.as_deref());
        JobRecord {
            job_title: raw.job_title,
            location: raw.location,
            job_type: raw.job_type,
            min_budget: raw.min_budget,
            max_budget: raw.max_budget,
            skills,
        }
    }
}

/// The fields of a job returned to callers. Skills and match count stay internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub job_title: String,
    pub location: String,
    pub job_type: String,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
}

impl From<&JobRecord> for JobSummary {
    fn from(job: &JobRecord) -> Self {
        JobSummary {
            job_title: job.job_title.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            min_budget: job.min_budget,
            max_budget: job.max_budget,
        }
    }
}
