use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srf")]
#[command(
    version,
    about = "Smart Recipe Finder - match recipes to the ingredients you have",
    long_about = "Smart Recipe Finder (SRF)\n\nModes:\n- find: match recipes against typed or image-detected ingredients.\n- detect: detect ingredients in a photo via the recipe service.\n- subs: look up substitutes for missing ingredients.\n- save / rate / saved: manage the local saved-recipes list and ratings.\n- samples: show a few sample recipes from the service.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set API URL, defaults, and store path; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect ingredients from an image file
    Detect {
        #[arg(long, help = "Image file to upload for ingredient detection")]
        image: PathBuf,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Find recipes matching an ingredient list
    Find {
        #[arg(
            long,
            help = "Comma-separated ingredients (e.g., \"egg, milk, cheese\")"
        )]
        ingredients: Option<String>,

        #[arg(
            long,
            help = "Image file to detect ingredients from when --ingredients is omitted"
        )]
        image: Option<PathBuf>,

        #[arg(long, help = "Dietary filter (e.g., vegetarian, vegan, any)")]
        dietary: Option<String>,

        #[arg(long, help = "Maximum number of recipes to return")]
        max_results: Option<u32>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Suggest substitutes for missing ingredients
    Subs {
        #[arg(long, help = "Comma-separated missing ingredients")]
        missing: String,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Save a matched recipe to the local collection
    Save {
        #[arg(long, help = "Id of the recipe to save, as shown in find output")]
        id: String,

        #[arg(
            long,
            help = "Comma-separated ingredients of the query that matched the recipe"
        )]
        ingredients: String,

        #[arg(long, help = "Dietary filter used for the query")]
        dietary: Option<String>,

        #[arg(long, help = "Maximum number of recipes the query returns")]
        max_results: Option<u32>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Rate a recipe (1-5 stars, fractions allowed)
    Rate {
        #[arg(long, help = "Id of the recipe to rate")]
        id: String,

        #[arg(long, help = "Rating between 1 and 5")]
        stars: f64,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// List the locally saved recipes with their ratings
    Saved {
        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Show a few sample recipes from the service (best-effort)
    Samples {
        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, OutputFormat};
    use clap::Parser;

    #[test]
    fn find_command_uses_defaults() {
        let cli = Cli::parse_from(["srf", "find", "--ingredients", "egg, milk"]);

        assert!(!cli.verbose);
        assert!(cli.config.is_none());

        match cli.command {
            Commands::Find {
                ingredients,
                image,
                dietary,
                max_results,
                format,
                output,
            } => {
                assert_eq!(ingredients.as_deref(), Some("egg, milk"));
                assert!(image.is_none());
                assert!(dietary.is_none());
                assert!(max_results.is_none());
                assert!(matches!(format, OutputFormat::Json));
                assert!(output.is_none());
            }
            _ => panic!("expected find command"),
        }
    }

    #[test]
    fn find_command_respects_overrides() {
        let cli = Cli::parse_from([
            "srf",
            "find",
            "--image",
            "fridge.jpg",
            "--dietary",
            "vegetarian",
            "--max-results",
            "3",
            "--format",
            "pretty",
            "--output",
            "results.json",
            "--config",
            "srf.toml",
        ]);

        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("srf.toml")));

        match cli.command {
            Commands::Find {
                ingredients,
                image,
                dietary,
                max_results,
                format,
                output,
            } => {
                assert!(ingredients.is_none());
                assert_eq!(image.as_deref(), Some(std::path::Path::new("fridge.jpg")));
                assert_eq!(dietary.as_deref(), Some("vegetarian"));
                assert_eq!(max_results, Some(3));
                assert!(matches!(format, OutputFormat::Pretty));
                assert_eq!(output.as_deref(), Some(std::path::Path::new("results.json")));
            }
            _ => panic!("expected find command with overrides"),
        }
    }

    #[test]
    fn rate_command_parses_fractional_stars() {
        let cli = Cli::parse_from([
            "srf", "--verbose", "rate", "--id", "7", "--stars", "4.5",
        ]);

        assert!(cli.verbose);

        match cli.command {
            Commands::Rate { id, stars, .. } => {
                assert_eq!(id, "7");
                assert!((stars - 4.5).abs() < f64::EPSILON);
            }
            _ => panic!("expected rate command"),
        }
    }

    #[test]
    fn subs_command_requires_missing() {
        assert!(Cli::try_parse_from(["srf", "subs"]).is_err());

        let cli = Cli::parse_from(["srf", "subs", "--missing", "butter, egg"]);
        match cli.command {
            Commands::Subs { missing, .. } => assert_eq!(missing, "butter, egg"),
            _ => panic!("expected subs command"),
        }
    }
}
