use std::path::PathBuf;
use std::process::ExitCode;

use srf_lib::output::SRF_OUTPUT_VERSION;
use srf_lib::{map_api_error, Control, SamplesOutput, SrfOutput};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_settings, resolve_settings, QueryFlagSources};

/// How many sample recipes to show.
const SAMPLE_COUNT: usize = 3;

/// Run the samples command: show a few recipes from the service catalog.
/// Best-effort: a transport failure is swallowed, not surfaced as an error.
pub async fn run_samples(
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

    let client = match super::build_client(&settings) {
        Ok(client) => client,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let mut control = Control::new("Sample Recipes", "Loading\u{2026}");
    if verbose {
        eprintln!("{}", control.pending_label());
    }
    let mut recipes = match control
        .run(async { client.list_recipes().await.map_err(map_api_error) })
        .await
    {
        Ok(recipes) => recipes,
        Err(err) => {
            // Cosmetic feature: failure is non-fatal.
            if verbose {
                eprintln!("Sample recipes unavailable: {err}");
            }
            return ExitCode::SUCCESS;
        }
    };
    recipes.truncate(SAMPLE_COUNT);

    let body = SrfOutput::Samples(SamplesOutput {
        version: SRF_OUTPUT_VERSION.to_string(),
        recipes,
    });
    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {err}");
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
