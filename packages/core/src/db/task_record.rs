//! Task Record Mapper
//!
//! Converts one projected row (`id`, `title`, `completed`, `parent_id`, in that
//! order) into a [`Task`]. The parent column is optional: `null` or a missing
//! column means "no parent". Any other shape mismatch is reported as
//! [`TaskError::DataCorruption`] naming the offending field, never a panic.

use crate::db::queries::TASK_COLUMNS;
use crate::db::Row;
use crate::error::TaskError;
use crate::models::Task;
use serde_json::Value;

const ID: usize = 0;
const TITLE: usize = 1;
const COMPLETED: usize = 2;
const PARENT_ID: usize = 3;

impl TryFrom<&Row> for Task {
    type Error = TaskError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Task {
            id: required_string(row, ID)?,
            title: required_string(row, TITLE)?,
            completed: required_bool(row, COMPLETED)?,
            parent_id: optional_string(row, PARENT_ID)?,
        })
    }
}

fn field_name(row: &Row, index: usize) -> String {
    row.column(index)
        .or_else(|| TASK_COLUMNS.get(index).copied())
        .unwrap_or("<unnamed>")
        .to_string()
}

fn required<'a>(row: &'a Row, index: usize) -> Result<&'a Value, TaskError> {
    row.get(index)
        .ok_or_else(|| TaskError::data_corruption(field_name(row, index), "missing column"))
}

fn required_string(row: &Row, index: usize) -> Result<String, TaskError> {
    match required(row, index)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(row, index, "string", other)),
    }
}

fn required_bool(row: &Row, index: usize) -> Result<bool, TaskError> {
    match required(row, index)? {
        Value::Bool(b) => Ok(*b),
        other => Err(mismatch(row, index, "boolean", other)),
    }
}

fn optional_string(row: &Row, index: usize) -> Result<Option<String>, TaskError> {
    match row.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(mismatch(row, index, "string or null", other)),
    }
}

fn mismatch(row: &Row, index: usize, expected: &str, found: &Value) -> TaskError {
    TaskError::data_corruption(
        field_name(row, index),
        format!("expected {}, found {}", expected, value_kind(found)),
    )
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
