use crate::{dto::input::HomeworkStatus, error::Error};
use serde_json::Value;
use std::str::FromStr;

///
/// Chat message describing current status of a single homework.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Deduplication key, `id` of the homework or its name when id is absent
    pub id: String,
    pub message: String,
}

impl TryFrom<&Value> for StatusChange {
    type Error = Error;

    fn try_from(homework: &Value) -> Result<Self, Self::Error> {
        let name = homework
            .get("homework_name")
            .or_else(|| homework.get("name"))
            .and_then(Value::as_str)
            .ok_or(Error::FieldMissing("В ответе нет \"homework_name\""))?;

        let status = match homework.get("status") {
            Some(Value::String(status)) => status.as_str(),
            Some(status) => return Err(Error::UnknownStatus(status.to_string())),
            None => return Err(Error::FieldMissing("В ответе нет \"status\"")),
        };
        let status = HomeworkStatus::from_str(status)
            .map_err(|_| Error::UnknownStatus(status.to_string()))?;

        let id = match homework.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Null) | None => name.to_string(),
            Some(id) => id.to_string(),
        };
        let message = format!(
            "Изменился статус проверки работы \"{name}\". {}",
            status.verdict()
        );

        Ok(Self { id, message })
    }
}
