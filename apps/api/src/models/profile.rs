use serde::{Deserialize, Serialize};

use crate::models::levels::{lenient_level, EducationLevel, ExperienceLevel};

/// Seeker profile fields consumed by the match scorer. Callers extract these
/// from the session-store user record; every field is optional and a missing
/// field simply removes that factor from scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_level")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_level")]
    pub education: Option<EducationLevel>,
    /// Free text; the substring "remote" (any case) acts as a wildcard.
    #[serde(default)]
    pub location: Option<String>,
}
