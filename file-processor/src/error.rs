use reqwest::StatusCode;

#[derive(Debug)]
pub enum ProcessingError {
    Request(reqwest::Error),
    NotFound(String),
    HttpStatus(StatusCode, String),
    MissingField(&'static str),
    DriveMismatch { expected: String, actual: String },
    Parse(String),
}

impl std::fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingError::Request(e) => write!(f, "Request error: {}", e),
            ProcessingError::NotFound(file_id) => write!(f, "File not found: {}", file_id),
            ProcessingError::HttpStatus(status, body) => write!(f, "HTTP status error: {}, body: {:?}", status, body),
            ProcessingError::MissingField(field) => write!(f, "File metadata has no '{}' field", field),
            ProcessingError::DriveMismatch { expected, actual } => {
                write!(f, "File belongs to drive {} but processor is bound to drive {}", actual, expected)
            }
            ProcessingError::Parse(message) => write!(f, "Parse error: {}", message),
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProcessingError {
    fn from(e: reqwest::Error) -> Self {
        ProcessingError::Request(e)
    }
}

impl From<csv::Error> for ProcessingError {
    fn from(e: csv::Error) -> Self {
        ProcessingError::Parse(e.to_string())
    }
}
