use thiserror::Error;

/// Input errors raised while turning form fields into generator inputs.
///
/// These are never program faults: callers render them through
/// [`render_outcome`](crate::core::render_outcome) as `Error: ...` text in place
/// of the normal result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric field held text that is neither blank nor a number
    #[error("could not convert {field} to a number: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// A computed length overflowed or became NaN
    #[error("{field} is not a finite length")]
    NonFinite { field: String },

    /// Cable category token not recognized
    #[error("unknown cable category '{value}' (expected cluster or feeder)")]
    UnknownCategory { value: String },

    /// Cable type token not offered for the chosen category
    #[error("cable type '{value}' is not available for {category} cable (expected one of: {expected})")]
    UnknownCableType {
        category: String,
        value: String,
        expected: String,
    },

    /// Feeder type token not recognized
    #[error("unknown feeder type '{value}' (expected one of: {expected})")]
    UnknownFeederType { value: String, expected: String },
}

impl Error {
    /// Text shown in the output panel or on stderr in place of a result.
    pub fn display_text(&self) -> String {
        format!("Error: {self}")
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_message() {
        let err = Error::InvalidNumber {
            field: "route".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.display_text(),
            "Error: could not convert route to a number: 'abc'"
        );
    }

    #[test]
    fn test_display_text_always_prefixed() {
        let err = Error::NonFinite {
            field: "total length".to_string(),
        };
        assert!(err.display_text().starts_with("Error: "));
        assert!(err.display_text().contains("total length"));
    }

    #[test]
    fn test_unknown_cable_type_lists_choices() {
        let err = Error::UnknownCableType {
            category: "cluster".to_string(),
            value: "96C/8T".to_string(),
            expected: "24C/2T, 36C/3T, 48C/4T".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("96C/8T"));
        assert!(msg.contains("36C/3T"));
    }
}
