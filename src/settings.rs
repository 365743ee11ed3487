use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

const DEFAULT_QUERIES: &[&str] = &[
    "top generative AI leaders",
    "GenAI startup founder CEO",
    "head of generative AI interview",
    "chief AI officer appointed",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub store_path: PathBuf,
    pub seed_path: PathBuf,
    pub queries: Vec<String>,
    pub results_per_query: usize,
    /// Environment variable holding the search API key.
    pub credential_var: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            store_path: PathBuf::from("leaders.json"),
            seed_path: PathBuf::from("seed_leaders.csv"),
            queries: DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect(),
            results_per_query: 10,
            credential_var: "SERPAPI_API_KEY".to_string(),
        }
    }
}

impl Settings {
    /// Settings from `LEADERS_*` environment variables over built-in defaults.
    pub fn load() -> Result<Self> {
        Self::from_source(
            Environment::with_prefix("LEADERS")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("queries"),
        )
    }

    fn from_source(env: Environment) -> Result<Self> {
        Config::builder()
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize())
            .context("invalid LEADERS_* configuration")
    }
}
