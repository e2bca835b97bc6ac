// College records from the seed fixture
// Decision: Records are opaque JSON objects; only `name` and `country` have meaning here

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Country assigned to records that do not name one.
pub const DEFAULT_COUNTRY: &str = "India";

/// One row of the colleges fixture. All fields pass through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollegeRecord(Map<String, Value>);

impl CollegeRecord {
    /// Upsert conflict key.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn country(&self) -> Option<&Value> {
        self.0.get("country")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Fill in `country` when it is absent, null or an empty string.
    pub fn with_default_country(mut self) -> Self {
        let specified = match self.0.get("country") {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !specified {
            self.0
                .insert("country".to_string(), Value::String(DEFAULT_COUNTRY.to_string()));
        }
        self
    }
}

impl From<Map<String, Value>> for CollegeRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
