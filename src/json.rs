use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{SeqResult, SequenceError};
use crate::sequence::AllOrNothing;

/// Reads a JSON array as a sequence of nullable elements.
///
/// `null` elements mark absence: the result is `Ok(Some(values))` with
/// every element deserialized as `T` when the array holds no nulls, and
/// `Ok(None)` when at least one element is null. Anything other than an
/// array is an error, as is an element that does not deserialize as `T`.
pub fn from_json_array<T: DeserializeOwned>(value: Value) -> SeqResult<Option<Vec<T>>> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(SequenceError::NotAnArray(json_type(&other))),
    };

    let values = items
        .into_iter()
        .map(|item| match item {
            Value::Null => Ok(None),
            item => serde_json::from_value(item).map(Some),
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    Ok(values.all_or_nothing())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
