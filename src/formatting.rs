use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use srf_lib::output::SRF_OUTPUT_VERSION;
use srf_lib::{
    join_ingredients, render_recipe_cards, render_saved, render_substitutions, ErrorOutput,
    SaveStatus, SrfError, SrfOutput,
};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &SrfOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: SrfError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = SrfOutput::Error(ErrorOutput {
        version: SRF_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &SrfOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &SrfOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &SrfOutput) -> String {
    match body {
        SrfOutput::Detect(out) => {
            let mut buf = String::new();
            if out.ingredients.is_empty() {
                writeln!(buf, "No ingredients detected in {}", out.image.display()).ok();
            } else {
                writeln!(buf, "Detected: {}", join_ingredients(&out.ingredients)).ok();
            }
            buf
        }
        SrfOutput::Match(out) => {
            let mut buf = String::new();
            writeln!(
                buf,
                "Query: {} (dietary: {}, max {})",
                join_ingredients(&out.ingredients),
                out.dietary,
                out.max_results
            )
            .ok();
            write!(buf, "{}", render_recipe_cards(&out.recipes)).ok();
            buf
        }
        SrfOutput::Substitutions(out) => {
            let requested: Vec<String> = out
                .suggestions
                .iter()
                .map(|entry| entry.ingredient.clone())
                .collect();
            let map = out
                .suggestions
                .iter()
                .map(|entry| (entry.ingredient.clone(), entry.substitutes.clone()))
                .collect();
            render_substitutions(&requested, &map)
        }
        SrfOutput::Save(out) => match out.status {
            SaveStatus::Saved => format!("Saved: {} (id {})\n", out.name, out.id),
            SaveStatus::AlreadySaved => format!("Already saved: {} (id {})\n", out.name, out.id),
        },
        SrfOutput::Rate(out) => format!("Thanks for rating! Recipe {} rated {}\n", out.id, out.rating),
        SrfOutput::Saved(out) => render_saved(&out.recipes, &out.ratings),
        SrfOutput::Samples(out) => {
            if out.recipes.is_empty() {
                "No sample recipes available.\n".to_string()
            } else {
                render_recipe_cards(&out.recipes)
            }
        }
        SrfOutput::Error(out) => {
            let mut buf = String::new();
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "[ERROR] {}", message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srf_lib::{
        DetectOutput, MatchOutput, RateOutput, SubstitutionEntry, SubstitutionsOutput,
        NO_SUGGESTIONS,
    };

    #[test]
    fn render_error_always_returns_fatal_exit_code() {
        let code = render_error(
            SrfError::Config("boom".to_string()),
            OutputFormat::Json,
            None,
        );
        assert_eq!(code, ExitCode::from(2));
    }

    #[test]
    fn format_pretty_detect_handles_empty_result() {
        let output = SrfOutput::Detect(DetectOutput {
            version: SRF_OUTPUT_VERSION.to_string(),
            image: PathBuf::from("fridge.jpg"),
            ingredients: Vec::new(),
        });
        let pretty = format_pretty(&output);
        assert!(pretty.contains("No ingredients detected"));
        assert!(pretty.contains("fridge.jpg"));
    }

    #[test]
    fn format_pretty_detect_joins_ingredients() {
        let output = SrfOutput::Detect(DetectOutput {
            version: SRF_OUTPUT_VERSION.to_string(),
            image: PathBuf::from("fridge.jpg"),
            ingredients: vec!["tomato".to_string(), "onion".to_string()],
        });
        assert!(format_pretty(&output).contains("Detected: tomato, onion"));
    }

    #[test]
    fn format_pretty_match_shows_placeholder_for_no_matches() {
        let output = SrfOutput::Match(MatchOutput {
            version: SRF_OUTPUT_VERSION.to_string(),
            ingredients: vec!["egg".to_string(), "milk".to_string(), "milk".to_string()],
            dietary: "any".to_string(),
            max_results: 5,
            recipes: Vec::new(),
        });
        let pretty = format_pretty(&output);
        assert!(pretty.contains("Query: egg, milk, milk"));
        assert!(pretty.contains("No recipes matched."));
    }

    #[test]
    fn format_pretty_substitutions_preserves_request_order() {
        let output = SrfOutput::Substitutions(SubstitutionsOutput {
            version: SRF_OUTPUT_VERSION.to_string(),
            suggestions: vec![
                SubstitutionEntry {
                    ingredient: "butter".to_string(),
                    substitutes: Vec::new(),
                },
                SubstitutionEntry {
                    ingredient: "milk".to_string(),
                    substitutes: vec!["soy milk".to_string(), "almond milk".to_string()],
                },
            ],
        });
        let pretty = format_pretty(&output);
        assert_eq!(
            pretty,
            format!("butter: {NO_SUGGESTIONS}\nmilk: soy milk, almond milk\n")
        );
    }

    #[test]
    fn format_pretty_rate_confirms() {
        let output = SrfOutput::Rate(RateOutput {
            version: SRF_OUTPUT_VERSION.to_string(),
            id: "3".to_string(),
            rating: 4.5,
        });
        let pretty = format_pretty(&output);
        assert!(pretty.contains("Thanks for rating!"));
        assert!(pretty.contains("4.5"));
    }

    #[test]
    fn format_pretty_handles_errors() {
        let output = SrfOutput::Error(ErrorOutput {
            version: SRF_OUTPUT_VERSION.to_string(),
            message: Some("bad input".to_string()),
            error: srf_lib::ErrorPayload {
                category: srf_lib::ErrorCategory::Validation,
                message: "bad input".to_string(),
                remediation: Some("check flags".to_string()),
            },
        });

        let pretty = format_pretty(&output);
        assert!(pretty.contains("[ERROR] bad input"));
        assert!(pretty.contains("Hint: check flags"));
    }
}
