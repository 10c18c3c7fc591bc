use std::{fs, num::ParseFloatError, path::Path};
use thiserror::Error;
use trapezoid_common::Real;

#[derive(Debug, Error)]
pub(crate) enum TraceFileError {
    #[error("IO Error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Invalid sample '{token}' on line {line}: {source}")]
    InvalidSample {
        token: String,
        line: usize,
        source: ParseFloatError,
    },
}

/// Parses a plain-text trace.
/// Samples are separated by whitespace or commas, and may span any number of
/// lines. Lines whose first non-blank character is `#` are comments.
pub(crate) fn parse_trace(text: &str) -> Result<Vec<Real>, TraceFileError> {
    let mut trace = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            let sample = token
                .parse::<Real>()
                .map_err(|source| TraceFileError::InvalidSample {
                    token: token.to_owned(),
                    line: index + 1,
                    source,
                })?;
            trace.push(sample);
        }
    }
    Ok(trace)
}

#[tracing::instrument]
pub(crate) fn load_trace_file(path: &Path) -> Result<Vec<Real>, TraceFileError> {
    let text = fs::read_to_string(path)?;
    let trace = parse_trace(&text)?;
    tracing::debug!(num_samples = trace.len(), "Loaded trace");
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sample_per_line() {
        assert_eq!(parse_trace("1\n2.5\n-3\n").unwrap(), vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn mixed_separators_and_comments() {
        let text = "# digitiser 3, channel 1\n10, 11 12\n\n  # another comment\n13,14,\n";
        assert_eq!(
            parse_trace(text).unwrap(),
            vec![10.0, 11.0, 12.0, 13.0, 14.0]
        );
    }

    #[test]
    fn empty_file() {
        assert!(parse_trace("").unwrap().is_empty());
    }

    #[test]
    fn invalid_sample_reports_line() {
        let error = parse_trace("1\n2\nthree\n").unwrap_err();
        assert!(matches!(
            error,
            TraceFileError::InvalidSample { ref token, line: 3, .. } if token == "three"
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            load_trace_file(Path::new("/nonexistent/trace.txt")),
            Err(TraceFileError::IO(_))
        ));
    }
}
