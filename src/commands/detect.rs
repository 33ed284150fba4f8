use std::path::PathBuf;
use std::process::ExitCode;

use srf_lib::output::SRF_OUTPUT_VERSION;
use srf_lib::{map_api_error, Control, DetectOutput, SrfError, SrfOutput};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_settings, resolve_settings, QueryFlagSources};

/// Run the detect command: upload an image and report detected ingredients.
pub async fn run_detect(
    config_path: Option<PathBuf>,
    verbose: bool,
    image: PathBuf,
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

    let bytes = match std::fs::read(&image) {
        Ok(bytes) => bytes,
        Err(err) => {
            return render_error(
                SrfError::validation(format!(
                    "cannot read image file {}: {}",
                    image.display(),
                    err
                )),
                format,
                output.clone(),
            )
        }
    };
    let file_name = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let client = match super::build_client(&settings) {
        Ok(client) => client,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let mut control = Control::new("Detect Ingredients from Image", "Detecting\u{2026}");
    if verbose {
        eprintln!("{}", control.pending_label());
    }
    let detected = match control
        .run(async {
            client
                .detect_ingredients(file_name, bytes)
                .await
                .map_err(map_api_error)
        })
        .await
    {
        Ok(list) => list,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let body = SrfOutput::Detect(DetectOutput {
        version: SRF_OUTPUT_VERSION.to_string(),
        image,
        ingredients: detected,
    });
    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {err}");
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
