use thiserror::Error;

/// Ways a profile lookup can fail. Every variant ends up as the message of a failed query.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("User not found")]
    NotFound,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// A `--date_format` value chrono cannot format with.
#[derive(Debug, Error)]
#[error("invalid date format {0:?}")]
pub struct InvalidDateFormat(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        assert_eq!(LookupError::NotFound.to_string(), "User not found");
    }

    #[test]
    fn malformed_response_keeps_parser_description() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = parse_error.to_string();
        assert_eq!(LookupError::from(parse_error).to_string(), expected);
    }
}
