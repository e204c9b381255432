//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of an applied model:
//! - the recurrence constants and coefficients (enough to rebuild the model)
//! - run metadata (tool, timestamp, base name)
//! - the evaluated sweep grid
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::domain::{CurveFile, CurveGrid};
use crate::error::AppError;
use crate::models::OrthoPolyModel;
use crate::sweep::Sample;

/// Write a curve JSON file.
pub fn write_curve_json(
    path: &Path,
    model: &OrthoPolyModel,
    base_name: &str,
    samples: &[Sample],
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    let curve = CurveFile {
        tool: "orthopoly".to_string(),
        generated: Local::now().to_rfc3339(),
        base_name: base_name.to_string(),
        degree: model.degree(),
        alpha: model.alpha().to_vec(),
        norm2: model.norm2().to_vec(),
        coeffs: model.coeffs().to_vec(),
        grid: CurveGrid {
            x: samples.iter().map(|s| s.x).collect(),
            y: samples.iter().map(|s| s.y.is_finite().then_some(s.y)).collect(),
        },
    };

    serde_json::to_writer_pretty(BufWriter::new(file), &curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;
    info!(path = %path.display(), "wrote curve JSON");

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

/// Read a curve JSON file and rebuild its model.
pub fn load_model_from_json(path: &Path) -> Result<OrthoPolyModel, AppError> {
    let curve = read_curve_json(path)?;
    curve
        .to_model()
        .map_err(|e| AppError::new(3, format!("Invalid model in '{}': {e}", path.display())))
}
