use std::path::PathBuf;
use std::process::ExitCode;

use srf_lib::output::SRF_OUTPUT_VERSION;
use srf_lib::{
    map_api_error, parse_ingredient_list, Control, SaveOutcome, SaveOutput, SaveStatus, SrfError,
    SrfOutput,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_settings, resolve_settings, QueryFlagSources};

/// Run the save command: re-run the match for the given query, pick the
/// recipe by id out of the results, and append it to the saved collection
/// unless it is already there.
#[allow(clippy::too_many_arguments)]
pub async fn run_save(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    verbose: bool,
    id: String,
    ingredients: String,
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

    let query = parse_ingredient_list(&ingredients);
    if query.is_empty() {
        return render_error(
            SrfError::validation("no ingredients provided for the matching query"),
            format,
            output.clone(),
        );
    }

    let client = match super::build_client(&settings) {
        Ok(client) => client,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let mut control = Control::new("Save", "Fetching recipe\u{2026}");
    if verbose {
        eprintln!("{}", control.pending_label());
    }
    let recipes = match control
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

    let Some(recipe) = recipes.into_iter().find(|r| r.id == id) else {
        return render_error(
            SrfError::validation(format!(
                "recipe id {id} is not in the match results for this query"
            )),
            format,
            output.clone(),
        );
    };

    let mut store = super::open_store(&settings);
    let outcome = match store.save(&recipe) {
        Ok(outcome) => outcome,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let body = SrfOutput::Save(SaveOutput {
        version: SRF_OUTPUT_VERSION.to_string(),
        id: recipe.id.clone(),
        name: recipe.name.clone(),
        status: match outcome {
            SaveOutcome::Saved => SaveStatus::Saved,
            SaveOutcome::AlreadySaved => SaveStatus::AlreadySaved,
        },
    });
    if let Err(err) = write_output(&body, format, output) {
        eprintln!("Failed to write output: {err}");
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
