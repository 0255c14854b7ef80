// Skill matching: normalization of raw skill strings, skill sets, and the
// overlap ranking behind POST /recommend.
// Ranking is request-local; the catalog is never mutated after load.

pub mod matcher;
pub mod normalize;
pub mod skill_set;

pub use matcher::{recommend, JobMatcher, SkillOverlapMatcher};
pub use skill_set::SkillSet;
