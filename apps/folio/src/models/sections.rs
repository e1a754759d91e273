//! Section record shapes.
//!
//! Every field defaults when it is absent, `null` or of the wrong type: a
//! record with bad fields still deserializes and renders an incomplete
//! fragment instead of being dropped.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Field deserializer that falls back to `T::default()` for `null` or a
/// value of the wrong shape.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    match serde_json::from_value(value) {
        Ok(field) => Ok(field),
        Err(e) => {
            warn!("Field could not be read and was left empty: {e}");
            Ok(T::default())
        }
    }
}

/// A value the configuration may supply either as a number or as text
/// (years, counters, proficiency levels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkPair {
    #[serde(deserialize_with = "or_default")]
    pub pdf: String,
    #[serde(deserialize_with = "or_default")]
    pub external: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "or_default")]
    pub degree: String,
    #[serde(deserialize_with = "or_default")]
    pub university: String,
    #[serde(deserialize_with = "or_default")]
    pub years: String,
    #[serde(deserialize_with = "or_default")]
    pub logo: String,
    #[serde(deserialize_with = "or_default")]
    pub badge: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "or_default")]
    pub position: String,
    #[serde(deserialize_with = "or_default")]
    pub organization: String,
    #[serde(deserialize_with = "or_default")]
    pub years: String,
    #[serde(deserialize_with = "or_default")]
    pub logo: String,
    #[serde(deserialize_with = "or_default")]
    pub badge: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationEntry {
    #[serde(deserialize_with = "or_default")]
    pub year: Scalar,
    #[serde(deserialize_with = "or_default")]
    pub title: String,
    /// Venue name; the configuration calls it `journal`.
    #[serde(deserialize_with = "or_default")]
    pub journal: String,
    #[serde(deserialize_with = "or_default")]
    pub date: String,
    #[serde(deserialize_with = "or_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub links: LinkPair,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "or_default")]
    pub title: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub category: String,
    /// CSS background value, e.g. `linear-gradient(135deg, #667eea 0%, #764ba2 100%)`.
    #[serde(deserialize_with = "or_default")]
    pub gradient: String,
    /// Font Awesome icon id such as `fa-microscope`.
    #[serde(deserialize_with = "or_default")]
    pub icon: String,
    #[serde(deserialize_with = "or_default")]
    pub links: LinkPair,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardEntry {
    #[serde(deserialize_with = "or_default")]
    pub icon: String,
    #[serde(deserialize_with = "or_default")]
    pub title: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    /// Proficiency as a percentage of the level bar.
    #[serde(deserialize_with = "or_default")]
    pub level: Scalar,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertiseEntry {
    #[serde(deserialize_with = "or_default")]
    pub icon: String,
    #[serde(deserialize_with = "or_default")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchInterestEntry {
    #[serde(deserialize_with = "or_default")]
    pub icon: String,
    #[serde(deserialize_with = "or_default")]
    pub title: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipEntry {
    #[serde(deserialize_with = "or_default")]
    pub logo: String,
    #[serde(deserialize_with = "or_default")]
    pub organization: String,
    #[serde(deserialize_with = "or_default")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceEntry {
    #[serde(rename = "type", deserialize_with = "or_default")]
    pub kind: String,
    #[serde(deserialize_with = "or_default")]
    pub icon: String,
    #[serde(deserialize_with = "or_default")]
    pub title: String,
    #[serde(deserialize_with = "or_default")]
    pub location: String,
    #[serde(deserialize_with = "or_default")]
    pub topic: String,
    #[serde(deserialize_with = "or_default")]
    pub tags: Vec<String>,
}

impl ConferenceEntry {
    pub fn is_keynote(&self) -> bool {
        self.kind.eq_ignore_ascii_case("keynote")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeachingStat {
    #[serde(deserialize_with = "or_default")]
    pub number: Scalar,
    #[serde(deserialize_with = "or_default")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeachingArea {
    #[serde(deserialize_with = "or_default")]
    pub icon: String,
    #[serde(deserialize_with = "or_default")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeachingEntry {
    #[serde(deserialize_with = "or_default")]
    pub icon: String,
    #[serde(deserialize_with = "or_default")]
    pub title: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub stats: Vec<TeachingStat>,
    #[serde(deserialize_with = "or_default")]
    pub topics: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub areas: Vec<TeachingArea>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    #[serde(deserialize_with = "or_default")]
    pub src: String,
    #[serde(deserialize_with = "or_default")]
    pub caption: String,
}
