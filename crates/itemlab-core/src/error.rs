//! Engine error types.
//!
//! Only data-absence and parse failures are errors. Numeric degeneracies
//! (zero-variance cohorts, items everyone or no one answered correctly) are
//! guarded outputs, never errors.

use thiserror::Error;

/// Errors raised by the analysis engine.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input text could not be interpreted as a header + rows table.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The results table parsed but contained zero student rows.
    #[error("no student results found")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = AnalysisError::MalformedInput("empty results text".into());
        assert_eq!(e.to_string(), "malformed input: empty results text");
        assert_eq!(AnalysisError::NoData.to_string(), "no student results found");
    }
}
