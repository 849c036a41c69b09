use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload fields a submission must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "phone", "message"];

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated submission, trimmed and ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Required fields that were absent, not strings, or blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(pub Vec<&'static str>);

impl std::fmt::Display for MissingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing required fields: {}", self.0.join(", "))
    }
}

impl NewClient {
    pub fn from_payload(payload: &Value) -> Result<Self, MissingFields> {
        let mut values: Vec<String> = Vec::with_capacity(REQUIRED_FIELDS.len());
        let mut missing = Vec::new();

        for field in REQUIRED_FIELDS {
            match payload.get(field).and_then(Value::as_str).map(str::trim) {
                Some(v) if !v.is_empty() => values.push(v.to_string()),
                _ => missing.push(field),
            }
        }

        if !missing.is_empty() {
            return Err(MissingFields(missing));
        }

        let mut values = values.into_iter();
        Ok(NewClient {
            name: values.next().unwrap_or_default(),
            email: values.next().unwrap_or_default(),
            phone: values.next().unwrap_or_default(),
            message: values.next().unwrap_or_default(),
        })
    }

    /// The two fixed rows inserted by the seed endpoint.
    pub fn demo_rows() -> [NewClient; 2] {
        [
            NewClient {
                name: "Demo One".to_string(),
                email: "one@demo.com".to_string(),
                phone: "3000000000".to_string(),
                message: "Demo message 1".to_string(),
            },
            NewClient {
                name: "Demo Two".to_string(),
                email: "two@demo.com".to_string(),
                phone: "3000000001".to_string(),
                message: "Demo message 2".to_string(),
            },
        ]
    }
}
