// Remote colleges table
// Decision: Talk to Supabase through its PostgREST HTTP interface with reqwest
// Decision: Upserts merge on the conflict column (overwrite), never ignore duplicates
// Decision: Send the union of row keys as `columns` so rows with different key sets share one bulk insert

use crate::record::CollegeRecord;
use async_trait::async_trait;
use reqwest::header;
use std::collections::BTreeSet;
use thiserror::Error;

/// Column used to resolve upsert conflicts.
pub const CONFLICT_COLUMN: &str = "name";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid count response: {0}")]
    InvalidCount(String),
}

/// Remote table the seeder writes to.
#[async_trait]
pub trait CollegeTable: Send + Sync {
    /// Insert rows, overwriting existing rows with the same `name`.
    async fn upsert(&self, rows: &[CollegeRecord]) -> Result<(), TableError>;

    /// Exact row count of the table.
    async fn count(&self) -> Result<u64, TableError>;
}

/// PostgREST client for one Supabase table.
pub struct SupabaseTable {
    rest_url: String,
    service_role_key: String,
    http: reqwest::Client,
}

impl SupabaseTable {
    pub fn new(supabase_url: &str, service_role_key: &str, table: &str) -> Self {
        Self {
            rest_url: format!("{}/rest/v1/{}", supabase_url.trim_end_matches('/'), table),
            service_role_key: service_role_key.to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.http
            .request(method, &self.rest_url)
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, TableError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(TableError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CollegeTable for SupabaseTable {
    async fn upsert(&self, rows: &[CollegeRecord]) -> Result<(), TableError> {
        let columns = column_list(rows);
        let response = self
            .request(reqwest::Method::POST)
            .query(&[("on_conflict", CONFLICT_COLUMN), ("columns", columns.as_str())])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(rows)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, TableError> {
        let response = self
            .request(reqwest::Method::HEAD)
            .query(&[("select", "*")])
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = Self::check(response).await?;

        let range = response
            .headers()
            .get(header::CONTENT_RANGE)
            .ok_or_else(|| TableError::InvalidCount("missing Content-Range header".to_string()))?
            .to_str()
            .map_err(|e| TableError::InvalidCount(e.to_string()))?;

        parse_content_range(range)
    }
}

/// Quoted, sorted union of the keys across `rows`, e.g. `"city","name"`.
///
/// PostgREST rejects a bulk insert whose objects have different keys unless the
/// target columns are listed; keys missing from a row are then written as NULL.
pub fn column_list(rows: &[CollegeRecord]) -> String {
    rows.iter()
        .flat_map(|row| row.fields().keys())
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|key| format!("\"{key}\""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Extract the total from a PostgREST `Content-Range` value such as `0-24/250` or `*/0`.
pub fn parse_content_range(value: &str) -> Result<u64, TableError> {
    let (_, total) = value
        .rsplit_once('/')
        .ok_or_else(|| TableError::InvalidCount(value.to_string()))?;
    total
        .trim()
        .parse()
        .map_err(|_| TableError::InvalidCount(value.to_string()))
}
