use serde_json::{Map, Value};

use crate::error::ProcessingError;

/// One file's metadata as listed by the drive, e.g. `{"id": "...", "name": "a.csv", "mimeType": "text/csv"}`.
pub type FileMetadata = Map<String, Value>;

pub fn file_id(file: &FileMetadata) -> Result<&str, ProcessingError> {
    string_field(file, "id").ok_or(ProcessingError::MissingField("id"))
}

pub fn file_name(file: &FileMetadata) -> Result<&str, ProcessingError> {
    string_field(file, "name").ok_or(ProcessingError::MissingField("name"))
}

pub fn mime_type(file: &FileMetadata) -> Option<&str> {
    string_field(file, "mimeType")
}

pub fn drive_id(file: &FileMetadata) -> Option<&str> {
    string_field(file, "driveId")
}

pub fn modified_time(file: &FileMetadata) -> Option<&str> {
    string_field(file, "modifiedTime")
}

// The Drive API encodes int64 values as strings.
pub fn file_size(file: &FileMetadata) -> Option<i64> {
    match file.get("size")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn string_field<'a>(file: &'a FileMetadata, key: &str) -> Option<&'a str> {
    file.get(key).and_then(Value::as_str)
}
