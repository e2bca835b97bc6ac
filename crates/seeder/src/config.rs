// Seeder configuration loaded from environment variables.
// Decision: Both Supabase credentials are required; validation happens once,
// before the fixture is touched
// Decision: Fixture path, table and batch size are fixed for the colleges seed

use std::path::PathBuf;
use thiserror::Error;

pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Fixture location, relative to the working directory.
pub const DEFAULT_FIXTURE_PATH: &str = "data/colleges-seed.json";
pub const COLLEGES_TABLE: &str = "colleges";
pub const BATCH_SIZE: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {}", .names.join(" and "))]
    MissingVar { names: Vec<&'static str> },
}

#[derive(Clone)]
pub struct SeederConfig {
    pub supabase_url: String,
    pub service_role_key: String,
    pub fixture_path: PathBuf,
    pub table: String,
    pub batch_size: usize,
}

// Keep the service role key out of logs
impl std::fmt::Debug for SeederConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeederConfig")
            .field("supabase_url", &self.supabase_url)
            .field("service_role_key", &"<redacted>")
            .field("fixture_path", &self.fixture_path)
            .field("table", &self.table)
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl SeederConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - SUPABASE_URL: project URL (required)
    /// - SUPABASE_SERVICE_ROLE_KEY: service role key (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let supabase_url = get(SUPABASE_URL_VAR);
        let service_role_key = get(SERVICE_ROLE_KEY_VAR);

        match (supabase_url, service_role_key) {
            (Some(supabase_url), Some(service_role_key)) => Ok(Self {
                supabase_url: supabase_url.trim().trim_end_matches('/').to_string(),
                service_role_key: service_role_key.trim().to_string(),
                fixture_path: PathBuf::from(DEFAULT_FIXTURE_PATH),
                table: COLLEGES_TABLE.to_string(),
                batch_size: BATCH_SIZE,
            }),
            (url, key) => {
                let mut names = Vec::new();
                if url.is_none() {
                    names.push(SUPABASE_URL_VAR);
                }
                if key.is_none() {
                    names.push(SERVICE_ROLE_KEY_VAR);
                }
                Err(ConfigError::MissingVar { names })
            }
        }
    }
}
