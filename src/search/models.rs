//! Search request, person record and outcome types

use crate::config::QuerySettings;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a people search, sent once as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Job titles to match
    pub person_titles: Vec<String>,
    /// Page number (1-indexed)
    pub page: u32,
    /// Results per page
    pub per_page: u32,
}

impl SearchRequest {
    pub fn new(person_titles: Vec<String>, page: u32, per_page: u32) -> Self {
        Self {
            person_titles,
            page,
            per_page,
        }
    }

    /// JSON body for the wire
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "person_titles": self.person_titles,
            "page": self.page,
            "per_page": self.per_page,
        })
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::from(&QuerySettings::default())
    }
}

impl From<&QuerySettings> for SearchRequest {
    fn from(query: &QuerySettings) -> Self {
        Self::new(query.person_titles.clone(), query.page, query.per_page)
    }
}

/// One matched individual.
///
/// The remote schema is loose, so the record keeps the raw object and every
/// accessor degrades to an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonRecord {
    fields: Map<String, Value>,
}

impl PersonRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a record from a JSON value; non-objects are rejected
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned().map(Self::new)
    }

    /// Extract the records under `people`. Anything malformed reads as none.
    pub fn list_from_document(document: &Value) -> Vec<PersonRecord> {
        document
            .get("people")
            .and_then(|p| p.as_array())
            .map(|people| people.iter().filter_map(Self::from_value).collect())
            .unwrap_or_default()
    }

    pub fn first_name(&self) -> String {
        scalar_text(self.fields.get("first_name"))
    }

    pub fn last_name(&self) -> String {
        scalar_text(self.fields.get("last_name"))
    }

    pub fn title(&self) -> String {
        scalar_text(self.fields.get("title"))
    }

    pub fn id(&self) -> String {
        scalar_text(self.fields.get("id"))
    }

    /// Name of the nested `organization`
    pub fn organization_name(&self) -> String {
        scalar_text(self.fields.get("organization").and_then(|o| o.get("name")))
    }
}

/// Text of a scalar JSON value; absent, null and containers are empty
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Result of one search attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200 response with a JSON body
    Success {
        records: Vec<PersonRecord>,
        raw: Value,
    },
    /// Any non-200 response
    HttpError { status: u16, body: String },
    /// The exchange itself failed
    TransportError { message: String },
}

impl Outcome {
    /// Build a success outcome from a parsed document
    pub fn success(raw: Value) -> Self {
        let records = PersonRecord::list_from_document(&raw);
        Outcome::Success { records, raw }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Process exit status for this outcome when failures are signalled
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success { .. } => 0,
            Outcome::HttpError { .. } => 1,
            Outcome::TransportError { .. } => 3,
        }
    }
}
