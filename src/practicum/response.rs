//! Shape checks on the raw status reply.
//!
//! The reply is kept as a [`serde_json::Value`] instead of a derived struct
//! so each shape violation keeps its own message in the log.

use serde_json::Value;

use crate::error::{BotError, Result};

/// Validates the reply and returns its `homeworks` list.
///
/// Checks, in order: the reply is an object, `homeworks` is an array,
/// `current_date` is an integer. The first failing check wins.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    log::info!("Проверка ответа от API начата");

    let Some(object) = response.as_object() else {
        return Err(BotError::Shape(format!(
            "Ответ от API не является словарём: response = {response}"
        )));
    };

    let Some(homeworks) = object.get("homeworks").and_then(Value::as_array) else {
        return Err(BotError::Shape(format!(
            "В ответе от API homeworks не список, response = {response}"
        )));
    };

    response_cursor(response)?;

    Ok(homeworks)
}

/// Reads `current_date` from a reply.
pub fn response_cursor(response: &Value) -> Result<i64> {
    match response.get("current_date") {
        Some(current_date) => current_date.as_i64().ok_or_else(|| not_a_number(current_date)),
        None => Err(not_a_number(&Value::Null)),
    }
}

fn not_a_number(current_date: &Value) -> BotError {
    BotError::Shape(format!(
        "В ответе от API пришло не число, current_date = {current_date}"
    ))
}
