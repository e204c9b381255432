//! The load -> sweep -> write workflow, independent of terminal presentation.

use tracing::info;

use crate::domain::RunConfig;
use crate::error::AppError;
use crate::io::{load_model, load_model_from_json, write_basis_dump, write_curve_json, write_fit_output};
use crate::models::OrthoPolyModel;
use crate::sweep::{Sample, run_sweep};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub model: OrthoPolyModel,
    pub samples: Vec<Sample>,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_pipeline(config: &RunConfig) -> Result<RunOutput, AppError> {
    // 1) Load and validate the model.
    let model = match &config.from_json {
        Some(path) => load_model_from_json(path)?,
        None => load_model(&config.files, config.parse_mode)?,
    };
    info!(base = config.files.base_name(), degree = model.degree(), "model loaded");

    // 2) Evaluate over the range and write the (x, y) file.
    let samples = run_sweep(&model, &config.range);
    write_fit_output(&config.files.fit_output(), &samples)?;

    // 3) Debug aid: every basis function over the same grid.
    if config.debug {
        let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
        write_basis_dump(&config.files.basis_output(), &model, &xs)?;
    }

    // 4) Optional portable export.
    if let Some(path) = &config.export_curve {
        write_curve_json(path, &model, config.files.base_name(), &samples)?;
    }

    Ok(RunOutput { model, samples })
}
