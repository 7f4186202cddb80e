//! Error codes attached to every logged failure.
//!
//! Codes never reach the client body; they exist so log queries can group
//! failures (`error_code = 2001`).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    ValidationError,
    InvalidJson,
    InvalidQuery,
    NotFound,

    // Server errors (2000-2999)
    InternalError,
    DatabaseError,
}

impl ErrorCode {
    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::InvalidJson => 1002,
            ErrorCode::InvalidQuery => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::InternalError => 2000,
            ErrorCode::DatabaseError => 2001,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::InvalidQuery => "INVALID_QUERY",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        }
    }

    pub const fn is_server_error(&self) -> bool {
        self.code() >= 2000
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_grouped_by_range() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::InvalidJson,
            ErrorCode::InvalidQuery,
            ErrorCode::NotFound,
        ] {
            assert!(!code.is_server_error(), "{code} should be a client error");
        }
        assert!(ErrorCode::InternalError.is_server_error());
        assert!(ErrorCode::DatabaseError.is_server_error());
    }

    #[test]
    fn test_serialization_matches_as_str() {
        let json = serde_json::to_string(&ErrorCode::InvalidQuery).unwrap();
        assert_eq!(json, format!("\"{}\"", ErrorCode::InvalidQuery.as_str()));
    }
}
