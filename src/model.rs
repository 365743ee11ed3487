use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";
pub const DEFAULT_SKILL: &str = "GenAI";
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

// ── Persisted records ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderRecord {
    pub id: String,
    pub name: String,
    #[serde(default = "unknown")]
    pub region: String,
    #[serde(default)]
    pub current_role: CurrentRole,
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub latest_activity: Vec<ActivityEntry>,
    #[serde(default = "placeholder_image")]
    pub profile_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentRole {
    #[serde(default = "unknown")]
    pub title: String,
    #[serde(default = "unknown")]
    pub company: String,
}

impl Default for CurrentRole {
    fn default() -> Self {
        CurrentRole {
            title: unknown(),
            company: unknown(),
        }
    }
}

/// One item of recent public activity (talk, article, interview).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

pub fn default_skills() -> Vec<String> {
    vec![DEFAULT_SKILL.to_string()]
}

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE_URL.to_string()
}

// ── Candidates ──

/// Where a candidate came from. Seed candidates outrank search candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOrigin {
    Seed { line: u64 },
    Search { query: String, url: String },
}

/// A partial leader awaiting dedup and enrichment. Only `name` is guaranteed;
/// every absent field is filled by the enricher.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub origin: CandidateOrigin,
}
