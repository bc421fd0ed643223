//! The `Item` record and its request payload.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NAME_REQUIRED: &str = "Name is required!";
pub const INVALID_JSON: &str = "Invalid json!";

/// A row of the `items` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Body accepted by create and update. An `id` must be an integer when present but is
/// otherwise ignored; a missing or `null` name is treated like an empty one.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ItemPayload {
    /// Parse a raw request body. Anything that is not a JSON object with an optional
    /// integer `id` and an optional string `name` is rejected as invalid JSON.
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        let invalid = |_: serde_json::Error| AppError::BadRequest(INVALID_JSON);
        match serde_json::from_slice::<Value>(body).map_err(invalid)? {
            // Derived struct deserializers also accept sequences; only objects are items.
            obj @ Value::Object(_) => serde_json::from_value(obj).map_err(invalid),
            _ => Err(AppError::BadRequest(INVALID_JSON)),
        }
    }

    /// Trimmed name, or `Name is required!` when nothing is left after trimming.
    pub fn validated_name(&self) -> Result<String, AppError> {
        let name = self.name.as_deref().unwrap_or("").trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(NAME_REQUIRED));
        }
        Ok(name.to_string())
    }
}
