//! Ordered experience and education tiers used for "at least this level"
//! comparisons. Derived `Ord` follows declaration order, so tier arithmetic
//! never sees an out-of-range ordinal.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Seeker experience tier. A job posting carries the *minimum* tier required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl FromStr for ExperienceLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            "expert" => Ok(ExperienceLevel::Expert),
            _ => Err(()),
        }
    }
}

/// Education tier. A job posting carries the *minimum* tier required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Bachelor,
    Master,
    Phd,
}

impl FromStr for EducationLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high-school" => Ok(EducationLevel::HighSchool),
            "bachelor" => Ok(EducationLevel::Bachelor),
            "master" => Ok(EducationLevel::Master),
            "phd" => Ok(EducationLevel::Phd),
            _ => Err(()),
        }
    }
}

/// Lenient tier deserializer: unrecognized or non-string values become `None`
/// so the factor is simply not evaluated, instead of failing the request or
/// computing a shortfall from a bogus ordinal.
pub fn lenient_level<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok()))
}
