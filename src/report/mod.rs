//! Formatted terminal output.
//!
//! We keep formatting code in one place so the loading/evaluation code stays
//! free of presentation concerns.

use crate::domain::RunConfig;
use crate::models::OrthoPolyModel;
use crate::sweep::Sample;

/// Model dump headed by the base name it was loaded from.
pub fn format_model_report(base_name: &str, model: &OrthoPolyModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== orthopoly - {base_name} ===\n"));
    out.push_str(&model.describe());
    out
}

/// One-paragraph summary of what a run produced.
pub fn format_run_summary(config: &RunConfig, model: &OrthoPolyModel, samples: &[Sample]) -> String {
    let non_finite = samples.iter().filter(|s| !s.y.is_finite()).count();
    let mut out = String::new();
    out.push_str(&format!(
        "Applied degree {} fit over [{}, {}] step {}: {} rows\n",
        model.degree(),
        config.range.min,
        config.range.max,
        config.range.step,
        samples.len()
    ));
    out.push_str(&format!("Output: {}\n", config.files.fit_output().display()));
    if config.debug {
        out.push_str(&format!("Basis dump: {}\n", config.files.basis_output().display()));
    }
    if let Some(path) = &config.export_curve {
        out.push_str(&format!("Curve JSON: {}\n", path.display()));
    }
    if non_finite > 0 {
        out.push_str(&format!("Warning: {non_finite} non-finite predictions\n"));
    }
    out
}
