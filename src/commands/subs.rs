use std::path::PathBuf;
use std::process::ExitCode;

use srf_lib::output::SRF_OUTPUT_VERSION;
use srf_lib::{
    map_api_error, parse_ingredient_list, Control, SrfOutput, SubstitutionEntry,
    SubstitutionsOutput,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_settings, resolve_settings, QueryFlagSources};

/// Run the subs command: look up substitutes for missing ingredients.
pub async fn run_subs(
    config_path: Option<PathBuf>,
    verbose: bool,
    missing: String,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let requested = parse_ingredient_list(&missing);
    // Nothing asked for, nothing to do.
    if requested.is_empty() {
        if verbose {
            eprintln!("No missing ingredients given; skipping lookup.");
        }
        return ExitCode::SUCCESS;
    }

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

    let mut control = Control::new("Substitutions", "Looking up\u{2026}");
    if verbose {
        eprintln!("{}", control.pending_label());
    }
    let suggestions = match control
        .run(async { client.substitutions(&requested).await.map_err(map_api_error) })
        .await
    {
        Ok(map) => map,
        Err(err) => return render_error(err, format, output.clone()),
    };

    // One entry per requested ingredient, in the order they were asked for.
    let entries = requested
        .into_iter()
        .map(|ingredient| {
            let substitutes = suggestions.get(&ingredient).cloned().unwrap_or_default();
            SubstitutionEntry {
                ingredient,
                substitutes,
            }
        })
        .collect();

    let body = SrfOutput::Substitutions(SubstitutionsOutput {
        version: SRF_OUTPUT_VERSION.to_string(),
        suggestions: entries,
    });
    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {err}");
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
