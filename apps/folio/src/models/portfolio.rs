//! Root portfolio configuration.
//!
//! Constructed once before rendering and never mutated; every renderer
//! receives it (or one of its lists) by shared reference.

use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::Result;
use crate::models::sections::{
    or_default, AwardEntry, ConferenceEntry, EducationEntry, ExperienceEntry, ExpertiseEntry, GalleryImage,
    LanguageEntry, MembershipEntry, ProjectEntry, PublicationEntry, ResearchInterestEntry, Scalar,
    TeachingEntry,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub title: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub email: String,
    #[serde(deserialize_with = "or_default")]
    pub phone: String,
    #[serde(deserialize_with = "or_default")]
    pub location: String,
    /// Document shown by the CV modal.
    #[serde(deserialize_with = "or_default")]
    pub cv_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadlineStats {
    #[serde(deserialize_with = "or_default")]
    pub publications: Scalar,
    #[serde(deserialize_with = "or_default")]
    pub projects: Scalar,
    #[serde(deserialize_with = "or_default")]
    pub years_experience: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(deserialize_with = "or_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "or_default")]
    pub google_scholar: String,
    #[serde(deserialize_with = "or_default")]
    pub research_gate: String,
    #[serde(deserialize_with = "or_default")]
    pub github: String,
    #[serde(deserialize_with = "or_default")]
    pub twitter: String,
}

impl SocialMedia {
    /// `(network, url)` pairs in display order, empty URLs omitted.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("linkedin", self.linkedin.as_str()),
            ("google-scholar", self.google_scholar.as_str()),
            ("researchgate", self.research_gate.as_str()),
            ("github", self.github.as_str()),
            ("twitter", self.twitter.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    #[serde(deserialize_with = "or_default")]
    pub primary: String,
    #[serde(deserialize_with = "or_default")]
    pub secondary: String,
}

/// The full static configuration describing one researcher's portfolio.
///
/// Section lists are parsed leniently: a section with the wrong JSON shape
/// becomes empty and a record that cannot be read is dropped, each with a
/// warning, so one broken section never blocks the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    #[serde(deserialize_with = "or_default")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(deserialize_with = "lenient_list")]
    pub profile_photos: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub stats: Option<HeadlineStats>,
    #[serde(deserialize_with = "or_default")]
    pub social_media: Option<SocialMedia>,
    #[serde(deserialize_with = "lenient_list")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "lenient_map")]
    pub skills: IndexMap<String, Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub publications: Vec<PublicationEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub awards: Vec<AwardEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub languages: Vec<LanguageEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub expertise: Vec<ExpertiseEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub research_interests: Vec<ResearchInterestEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub memberships: Vec<MembershipEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub conferences: Vec<ConferenceEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub teaching: Vec<TeachingEntry>,
    #[serde(deserialize_with = "lenient_map")]
    pub gallery: IndexMap<String, Vec<GalleryImage>>,
    #[serde(deserialize_with = "or_default")]
    pub colors: Option<ColorScheme>,
}

impl PortfolioConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the configuration file. A missing file is `Ok(None)`: the page
    /// shell's placeholder content is used instead.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No portfolio configuration at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let config = Self::from_json_str(&raw)?;
        info!(
            "Loaded portfolio configuration from {} ({} publications, {} projects)",
            path.display(),
            config.publications.len(),
            config.projects.len()
        );
        Ok(Some(config))
    }
}

fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!("Expected a list of records, found {}; section ignored", kind_of(&other));
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                warn!("Record {index} is {}, not an object; dropped", kind_of(&item));
                return None;
            }
            match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Record {index} could not be read and was dropped: {e}");
                    None
                }
            }
        })
        .collect())
}

fn lenient_map<'de, D, V>(deserializer: D) -> std::result::Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries,
        Value::Null => return Ok(IndexMap::new()),
        other => {
            warn!("Expected a keyed mapping, found {}; section ignored", kind_of(&other));
            return Ok(IndexMap::new());
        }
    };

    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(v) => Some((key, v)),
            Err(e) => {
                warn!("Entry '{key}' could not be read and was dropped: {e}");
                None
            }
        })
        .collect())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
