use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::levels::{lenient_level, EducationLevel, ExperienceLevel};

/// A job posting as served by the jobs backend. Only the scoring fields are
/// typed; everything else (title, description, tags, salary, …) is carried
/// in `extra` and flows through ranking untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<String>>,
    /// Minimum experience tier required for the role.
    #[serde(
        default,
        deserialize_with = "lenient_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience_level: Option<ExperienceLevel>,
    /// Topics the role touches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    /// Minimum education tier required for the role.
    #[serde(
        default,
        deserialize_with = "lenient_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub education_required: Option<EducationLevel>,
    /// Free text; the substring "remote" (any case) acts as a wildcard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
