//! Tab-separated outputs of a sweep.
//!
//! - `{base}_out.dat`: one `x\ty` line per grid point
//! - `{base}_savePolys.dat`: each basis function at each grid point (debug aid for
//!   comparing against the fitting environment)
//!
//! Values are written with six decimals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::AppError;
use crate::models::OrthoPolyModel;
use crate::sweep::Sample;

/// Write the `(x, y)` samples.
pub fn write_fit_output(path: &Path, samples: &[Sample]) -> Result<(), AppError> {
    let mut out = create(path)?;

    for s in samples {
        writeln!(out, "{:.6}\t{:.6}", s.x, s.y).map_err(|e| write_error(path, e))?;
    }

    out.flush().map_err(|e| write_error(path, e))?;
    info!(path = %path.display(), rows = samples.len(), "wrote fit output");
    Ok(())
}

/// Write every basis function's value at each x, with a header row.
pub fn write_basis_dump(path: &Path, model: &OrthoPolyModel, xs: &[f64]) -> Result<(), AppError> {
    let mut out = create(path)?;

    write!(out, "dataValue\t").map_err(|e| write_error(path, e))?;
    for i in 0..model.degree() {
        write!(out, "polynomial_{:02}\t", i + 1).map_err(|e| write_error(path, e))?;
    }
    writeln!(out).map_err(|e| write_error(path, e))?;

    for &x in xs {
        write!(out, "{x:.6}\t").map_err(|e| write_error(path, e))?;
        for v in model.basis_values(x) {
            write!(out, "{v:.6}\t").map_err(|e| write_error(path, e))?;
        }
        writeln!(out).map_err(|e| write_error(path, e))?;
    }

    out.flush().map_err(|e| write_error(path, e))?;
    info!(path = %path.display(), rows = xs.len(), "wrote basis dump");
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to open '{}' for writing: {e}", path.display())))?;
    Ok(BufWriter::new(file))
}

fn write_error(path: &Path, e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write '{}': {e}", path.display()))
}
