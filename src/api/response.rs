use crate::enums::HomeworkStatus;
use crate::error::{ResponseError, StatusError};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Stand-in for an absent `status`. Never a valid table key, so records
/// without a status always report through [`StatusError::UnknownStatus`].
const NO_STATUS: &str = "no status";

/// A validated response from the homework statuses endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct ReviewUpdates {
    /// Homeworks whose review status changed since the requested date, in
    /// the order the server reported them.
    #[serde(default)]
    pub homeworks: Vec<HomeworkRecord>,
    /// The server's clock at the time of the response. Becomes the next
    /// `from_date`.
    pub current_date: i64,
}

/// One homework as reported by the API. Deserialized leniently; the fields
/// a notification needs are checked when the message is built.
#[derive(Deserialize, Debug, Clone)]
pub struct HomeworkRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reviewer_comment: Option<String>,
    #[serde(default)]
    pub date_updated: Option<String>,
    #[serde(default)]
    pub lesson_name: Option<String>,
}

impl HomeworkRecord {
    /// Builds the single-line notification for this record.
    ///
    /// Requires `homework_name` and a status present in the verdict table;
    /// anything else is a reported error, never a panic.
    pub fn notification_message(&self) -> Result<String, StatusError> {
        let homework_name = self.homework_name.as_deref()
            .ok_or(StatusError::MissingName)?;
        let status = self.status.as_deref()
            .unwrap_or(NO_STATUS);
        let status = HomeworkStatus::from_str(status)
            .map_err(|_| StatusError::UnknownStatus(status.to_owned()))?;

        Ok(format!(
            "Изменился статус проверки работы \"{}\". {}",
            homework_name,
            status.verdict(),
        ))
    }
}

/// Checks that the decoded response has the expected shape and converts it
/// into a [`ReviewUpdates`]. Pure; each violation gets its own variant so
/// the caller can log specifics.
pub fn check_response(response: &Value) -> Result<ReviewUpdates, ResponseError> {
    let map = response.as_object()
        .ok_or(ResponseError::NotAnObject)?;
    let homeworks = map.get("homeworks")
        .ok_or(ResponseError::MissingKey("homeworks"))?;
    let current_date = map.get("current_date")
        .ok_or(ResponseError::MissingKey("current_date"))?;

    if !homeworks.is_array() {
        return Err(ResponseError::WrongType("homeworks", "array"));
    }

    let current_date = current_date.as_i64()
        .ok_or(ResponseError::WrongType("current_date", "integer"))?;
    let homeworks = serde_json::from_value(homeworks.clone())?;

    Ok(ReviewUpdates {
        homeworks,
        current_date,
    })
}
