use std::path::PathBuf;
use std::process::ExitCode;

use srf_lib::output::SRF_OUTPUT_VERSION;
use srf_lib::{SavedOutput, SrfOutput};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_settings, resolve_settings, QueryFlagSources};

/// Run the saved command: list the local saved-recipes collection together
/// with any stored ratings. Purely local.
pub async fn run_saved(
    config_path: Option<PathBuf>,
    verbose: bool,
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

    let store = super::open_store(&settings);
    let recipes = match store.saved_recipes() {
        Ok(recipes) => recipes,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let ratings = match store.ratings() {
        Ok(ratings) => ratings,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let body = SrfOutput::Saved(SavedOutput {
        version: SRF_OUTPUT_VERSION.to_string(),
        recipes,
        ratings,
    });
    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {err}");
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
