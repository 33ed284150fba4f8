use std::path::PathBuf;
use std::process::ExitCode;

use srf_lib::output::SRF_OUTPUT_VERSION;
use srf_lib::{RateOutput, Rating, SrfOutput};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_settings, resolve_settings, QueryFlagSources};

/// Run the rate command: validate the rating and record it locally. No
/// network involved; an out-of-range value leaves the ratings map untouched.
pub async fn run_rate(
    config_path: Option<PathBuf>,
    verbose: bool,
    id: String,
    stars: f64,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let settings = resolve_settings(None, None, &config, &QueryFlagSources::default());
    if verbose {
        log_effective_settings(config_path.as_deref(), &settings);
    }

    let rating = match Rating::new(stars) {
        Ok(rating) => rating,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let mut store = super::open_store(&settings);
    if let Err(err) = store.rate(&id, rating) {
        return render_error(err, format, output.clone());
    }

    let body = SrfOutput::Rate(RateOutput {
        version: SRF_OUTPUT_VERSION.to_string(),
        id,
        rating: rating.value(),
    });
    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {err}");
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
