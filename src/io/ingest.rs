//! Vector file ingest.
//!
//! A fitted model is stored as three plain text files, one number per line:
//!
//! - `{base}_polyAlphas.dat` (recentering constants)
//! - `{base}_polyNorms.dat` (squared norms)
//! - `{base}_modelCoefficients.dat` (intercept first, then one per basis function)
//!
//! Design goals:
//! - **Blank lines are ignored** (trailing newlines from the writer are common)
//! - **Strict by default**: a non-numeric line is reported with its line number
//! - **Lenient on request**: non-numeric lines become `0.0`, using the longest
//!   numeric prefix when there is one
//! - **Separation of concerns**: no evaluation logic here

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{ModelFiles, ParseMode};
use crate::error::AppError;
use crate::models::OrthoPolyModel;

/// Read one vector file.
pub fn read_vector(path: &Path, mode: ParseMode) -> Result<Vec<f64>, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to open '{}': {e}", path.display())))?;

    debug!(path = %path.display(), "reading vector file");
    let values = parse_vector(&text, mode).map_err(|e| {
        AppError::new(
            2,
            format!("Invalid number in '{}' at line {}: {:?}", path.display(), e.line, e.content),
        )
    })?;
    info!(path = %path.display(), count = values.len(), "read vector");

    Ok(values)
}

/// A line that could not be parsed in strict mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
}

/// Parse newline-delimited numbers.
pub fn parse_vector(text: &str, mode: ParseMode) -> Result<Vec<f64>, LineError> {
    let mut values = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let s = raw.trim();
        if s.is_empty() {
            continue;
        }

        let value = match s.parse::<f64>() {
            Ok(v) => v,
            Err(_) => match mode {
                ParseMode::Strict => {
                    return Err(LineError {
                        line,
                        content: s.to_string(),
                    });
                }
                ParseMode::Lenient => {
                    let v = leading_number(s);
                    warn!(line, content = s, value = v, "non-numeric line read leniently");
                    v
                }
            },
        };

        debug!(line, value, "value");
        values.push(value);
    }

    Ok(values)
}

/// Longest prefix of `s` that parses as a number, else `0.0`.
fn leading_number(s: &str) -> f64 {
    (1..s.len())
        .rev()
        .filter(|&end| s.is_char_boundary(end))
        .find_map(|end| s[..end].trim_end().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Read all three vectors for `files` and validate them into a model.
pub fn load_model(files: &ModelFiles, mode: ParseMode) -> Result<OrthoPolyModel, AppError> {
    let base = files.base_name();
    let alpha = read_vector(&files.alphas(), mode)
        .map_err(|e| AppError::new(e.exit_code(), format!("Failed to read alpha vector for {base}: {e}")))?;
    let norm2 = read_vector(&files.norms(), mode)
        .map_err(|e| AppError::new(e.exit_code(), format!("Failed to read norm2 vector for {base}: {e}")))?;
    let coeffs = read_vector(&files.coefficients(), mode).map_err(|e| {
        AppError::new(e.exit_code(), format!("Failed to read model coeff vector for {base}: {e}"))
    })?;

    OrthoPolyModel::new(alpha, norm2, coeffs)
        .map_err(|e| AppError::new(3, format!("Invalid model for {base}: {e}")))
}
