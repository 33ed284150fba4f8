mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_detect, run_find, run_rate, run_samples, run_save, run_saved, run_subs};

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let args = cli::parse();

    match args.command {
        Commands::Detect {
            image,
            format,
            output,
        } => run_detect(args.config, args.verbose, image, format, output).await,
        Commands::Find {
            ingredients,
            image,
            dietary,
            max_results,
            format,
            output,
        } => {
            run_find(
                &raw_args,
                args.config,
                args.verbose,
                ingredients,
                image,
                dietary,
                max_results,
                format,
                output,
            )
            .await
        }
        Commands::Subs {
            missing,
            format,
            output,
        } => run_subs(args.config, args.verbose, missing, format, output).await,
        Commands::Save {
            id,
            ingredients,
            dietary,
            max_results,
            format,
            output,
        } => {
            run_save(
                &raw_args,
                args.config,
                args.verbose,
                id,
                ingredients,
                dietary,
                max_results,
                format,
                output,
            )
            .await
        }
        Commands::Rate {
            id,
            stars,
            format,
            output,
        } => run_rate(args.config, args.verbose, id, stars, format, output).await,
        Commands::Saved { format, output } => {
            run_saved(args.config, args.verbose, format, output).await
        }
        Commands::Samples { format, output } => {
            run_samples(args.config, args.verbose, format, output).await
        }
    }
}
