//! Structural validation of the API response.
//!
//! The API contract is untrusted and unversioned from this client's
//! perspective, so every assumption is checked explicitly before use: a
//! malformed response must surface as a distinguishable Schema error, not as
//! a panic deeper in the pipeline.

use hwbot_core::{HwbotError, Result};
use serde::Deserialize;
use serde_json::Value;

/// One submission's review state as returned by the API. Fields are optional
/// so absence is detected by [`crate::parse_status`] rather than by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Validated page of homework statuses. `current_date` is `None` when the key
/// is present but not an integer; the poll cursor then keeps its prior value.
#[derive(Debug, Clone)]
pub struct StatusPage {
    pub homeworks: Vec<Homework>,
    pub current_date: Option<i64>,
}

/// Enforces the response contract and extracts the homework list, in order
/// and untransformed (possibly empty).
///
/// Fails with a Schema error naming the violated requirement when the value
/// is not a JSON object, `homeworks` or `current_date` is absent, `homeworks`
/// is not an array, or an element of it is not an object.
pub fn check_response(value: &Value) -> Result<StatusPage> {
    let object = value
        .as_object()
        .ok_or_else(|| HwbotError::Schema("response is not a JSON object".into()))?;
    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| HwbotError::Schema("`homeworks` key is missing".into()))?;
    let current_date = object
        .get("current_date")
        .ok_or_else(|| HwbotError::Schema("`current_date` key is missing".into()))?;
    let items = homeworks
        .as_array()
        .ok_or_else(|| HwbotError::Schema("`homeworks` is not an array".into()))?;

    let homeworks = items
        .iter()
        .map(|item| {
            serde_json::from_value(item.clone())
                .map_err(|e| HwbotError::Schema(format!("homework record is malformed: {e}")))
        })
        .collect::<Result<Vec<Homework>>>()?;

    Ok(StatusPage {
        homeworks,
        current_date: current_date.as_i64(),
    })
}
