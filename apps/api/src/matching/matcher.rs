//! Job Matcher: pluggable, trait-based ranking of catalog jobs against a
//! user's skill set.
//!
//! Default: `SkillOverlapMatcher` (raw intersection size, stable order).
//! `AppState` holds an `Arc<dyn JobMatcher>`.

use tracing::{debug, info};

use crate::catalog::JobCatalog;
use crate::matching::SkillSet;
use crate::models::job::{JobRecord, JobSummary};

/// How many top matches are written to the debug log per request.
const LOGGED_TOP_MATCHES: usize = 5;

/// A catalog job paired with its match count for one request.
/// Borrows from the catalog; never stored beyond the request.
#[derive(Debug, Clone, Copy)]
pub struct RankedJob<'a> {
    pub job: &'a JobRecord,
    pub match_count: usize,
}

/// Ranks catalog jobs for a parsed user skill set.
///
/// Implementations must return only jobs with `match_count > 0`, ordered by
/// descending count with ties in catalog order.
pub trait JobMatcher: Send + Sync {
    fn rank<'a>(&self, catalog: &'a JobCatalog, user_skills: &SkillSet) -> Vec<RankedJob<'a>>;
}

/// Scores each job by the number of skill tokens it shares with the user.
pub struct SkillOverlapMatcher;

impl JobMatcher for SkillOverlapMatcher {
    fn rank<'a>(&self, catalog: &'a JobCatalog, user_skills: &SkillSet) -> Vec<RankedJob<'a>> {
        if user_skills.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<RankedJob<'a>> = catalog
            .iter()
            .map(|(job, job_skills)| RankedJob {
                job,
                match_count: user_skills.overlap(job_skills),
            })
            .filter(|r| r.match_count > 0)
            .collect();

        // sort_by is stable: equal counts keep catalog order
        ranked.sort_by(|a, b| b.match_count.cmp(&a.match_count));
        ranked
    }
}

/// Parses raw user input, ranks the catalog, and projects the public fields.
pub fn recommend(
    matcher: &dyn JobMatcher,
    catalog: &JobCatalog,
    user_skills_raw: &str,
) -> Vec<JobSummary> {
    let user_skills = SkillSet::parse_user_input(user_skills_raw);
    debug!("User entered skills: {user_skills} ({} tokens)", user_skills.len());

    let ranked = matcher.rank(catalog, &user_skills);

    if ranked.is_empty() {
        info!("No matching jobs found");
    } else {
        info!("Matching jobs found: {}", ranked.len());
        for r in ranked.iter().take(LOGGED_TOP_MATCHES) {
            debug!(
                match_count = r.match_count,
                skills = %r.job.skills,
                "{} | {} | {}",
                r.job.job_title,
                r.job.location,
                r.job.job_type
            );
        }
    }

    ranked.iter().map(|r| JobSummary::from(r.job)).collect()
}
