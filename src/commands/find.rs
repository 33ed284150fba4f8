use std::path::PathBuf;
use std::process::ExitCode;

use srf_lib::output::SRF_OUTPUT_VERSION;
use srf_lib::{
    join_ingredients, map_api_error, parse_ingredient_list, Control, MatchOutput, SrfError,
    SrfOutput,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_settings, resolve_settings, QueryFlagSources};

/// Run the find command: resolve an ingredient query (typed or detected from
/// an image) and match recipes against it.
#[allow(clippy::too_many_arguments)]
pub async fn run_find(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    verbose: bool,
    ingredients: Option<String>,
    image: Option<PathBuf>,
    dietary: Option<String>,
    max_results: Option<u32>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let flag_sources = QueryFlagSources::from_args(raw_args);
    let settings = resolve_settings(dietary, max_results, &config, &flag_sources);
    if verbose {
        log_effective_settings(config_path.as_deref(), &settings);
    }

    let client = match super::build_client(&settings) {
        Ok(client) => client,
        Err(err) => return render_error(err, format, output.clone()),
    };

    // Typed ingredients win; otherwise detect them from the image first.
    let query = match (&ingredients, &image) {
        (Some(text), _) => parse_ingredient_list(text),
        (None, Some(path)) => {
            let bytes = match std::fs::read(path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    return render_error(
                        SrfError::validation(format!(
                            "cannot read image file {}: {}",
                            path.display(),
                            err
                        )),
                        format,
                        output.clone(),
                    )
                }
            };
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            let mut detect_control =
                Control::new("Detect Ingredients from Image", "Detecting\u{2026}");
            if verbose {
                eprintln!("{}", detect_control.pending_label());
            }
            let detected = match detect_control
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
            if verbose && !detected.is_empty() {
                eprintln!("Detected: {}", join_ingredients(&detected));
            }
            detected
        }
        (None, None) => Vec::new(),
    };

    if query.is_empty() {
        return render_error(
            SrfError::validation(
                "no ingredients provided; enter some or detect them from an image",
            ),
            format,
            output.clone(),
        );
    }

    let mut find_control = Control::new("Find Recipes", "Finding\u{2026}");
    if verbose {
        eprintln!("{}", find_control.pending_label());
    }
    let recipes = match find_control
        .run(async {
            client
                .match_recipes(&query, &settings.dietary, settings.max_results)
                .await
                .map_err(map_api_error)
        })
        .await
    {
        Ok(recipes) => recipes,
        Err(err) => return render_error(err, format, output.clone()),
    };

    // An empty match list is a valid result, rendered as the placeholder.
    let body = SrfOutput::Match(MatchOutput {
        version: SRF_OUTPUT_VERSION.to_string(),
        ingredients: query,
        dietary: settings.dietary.clone(),
        max_results: settings.max_results,
        recipes,
    });
    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {err}");
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
