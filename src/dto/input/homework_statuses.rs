use crate::error::Error;
use serde_json::Value;

///
/// Validated body of the review API response.
///
/// Elements of `homeworks` are kept as raw JSON,
/// their fields are checked only when a status change is built from them.
///
#[derive(Debug)]
pub struct HomeworkStatuses {
    pub homeworks: Vec<Value>,
    pub current_date: Option<i64>,
}

impl TryFrom<Value> for HomeworkStatuses {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut body) = value else {
            return Err(Error::Shape("Ответ API не является словарём"));
        };

        let homeworks = match body.remove("homeworks") {
            Some(Value::Array(homeworks)) => homeworks,
            Some(_) => return Err(Error::Shape("Значение \"homeworks\" не является списком")),
            None => return Err(Error::Shape("В ответе отсутствует ключ \"homeworks\"")),
        };

        let current_date = body.get("current_date").and_then(Value::as_i64);

        Ok(Self {
            homeworks,
            current_date,
        })
    }
}
