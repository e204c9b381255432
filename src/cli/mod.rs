//! Command-line parsing for the orthogonal polynomial applier.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! loading/evaluation code. Flags that make sense per machine can also be set
//! through the environment (or a `.env` file).

use std::path::PathBuf;

use clap::Parser;

use crate::domain::ParseMode;

/// Top-level CLI.
///
/// `orthopoly myData -1.5 0.01 1.5 debug` reads `myData_polyAlphas.dat`,
/// `myData_polyNorms.dat` and `myData_modelCoefficients.dat`, evaluates the fit on
/// `[-1.5, 1.5]` in steps of `0.01` and writes `myData_out.dat`.
#[derive(Debug, Parser)]
#[command(
    name = "orthopoly",
    version,
    about = "Apply a fitted orthogonal polynomial model over a range of x values",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Base name of the model files (`{BASE_NAME}_polyAlphas.dat`, ...).
    pub base_name: String,

    /// First x value.
    pub min: f64,

    /// Increment between x values (must be positive).
    pub step: f64,

    /// Last x value (inclusive, subject to rounding of the accumulated step).
    pub max: f64,

    /// Any trailing word (conventionally `debug`) turns on debug mode: print the
    /// model, write the basis dump, log every value read.
    #[arg(value_name = "DEBUG")]
    pub mode: Option<String>,

    /// Same as the trailing `debug` word.
    #[arg(long)]
    pub debug: bool,

    /// How to treat non-numeric lines in the vector files.
    #[arg(long = "parse", value_enum, env = "ORTHOPOLY_PARSE", default_value_t = ParseMode::Strict)]
    pub parse_mode: ParseMode,

    /// Directory for output files (defaults to next to the inputs).
    #[arg(long, env = "ORTHOPOLY_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Load the model from a curve JSON written by `--export-curve` instead of the `.dat` files.
    #[arg(long = "from-json", value_name = "JSON")]
    pub from_json: Option<PathBuf>,

    /// Export the model and the evaluated grid to JSON.
    #[arg(long = "export-curve", value_name = "JSON")]
    pub export_curve: Option<PathBuf>,
}

impl Cli {
    pub fn debug_enabled(&self) -> bool {
        self.debug || self.mode.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_invocation_with_debug_word() {
        let cli = Cli::try_parse_from(["orthopoly", "myData", "-1.5", "0.01", "1.5", "debug"]).unwrap();
        assert_eq!(cli.base_name, "myData");
        assert_eq!(cli.min, -1.5);
        assert_eq!(cli.step, 0.01);
        assert_eq!(cli.max, 1.5);
        assert!(cli.debug_enabled());
    }

    #[test]
    fn debug_is_off_without_the_trailing_word() {
        let cli = Cli::try_parse_from(["orthopoly", "myData", "0", "1", "10"]).unwrap();
        assert!(!cli.debug_enabled());
        assert!(cli.from_json.is_none());
    }

    #[test]
    fn any_trailing_word_enables_debug() {
        let cli = Cli::try_parse_from(["orthopoly", "m", "0", "1", "2", "x"]).unwrap();
        assert!(cli.debug_enabled());
    }

    #[test]
    fn rejects_missing_range_arguments() {
        assert!(Cli::try_parse_from(["orthopoly", "myData", "0", "1"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_range() {
        assert!(Cli::try_parse_from(["orthopoly", "myData", "zero", "1", "10"]).is_err());
    }

    #[test]
    fn lenient_parsing_is_selectable() {
        let cli = Cli::try_parse_from(["orthopoly", "--parse", "lenient", "m", "0", "1", "2"]).unwrap();
        assert_eq!(cli.parse_mode, ParseMode::Lenient);
    }
}
