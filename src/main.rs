use anyhow::Context;
use clap::Parser;
use moviebrowser::cli::Cli;
use moviebrowser::config::Config;
use moviebrowser::films::FilmsClient;
use moviebrowser::headless::{self, OutputFormat};
use moviebrowser::logging::init_tracing;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let client = FilmsClient::new(&config.api).context("Failed to build HTTP client")?;

    let format = if cli.json {
        Some(OutputFormat::Json)
    } else if cli.print {
        Some(OutputFormat::Text)
    } else {
        None
    };

    match format {
        Some(format) => run_headless(&client, format),
        None => {
            moviebrowser::ui::runtime::run(&config, client)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_headless(client: &FilmsClient, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let state = runtime.block_on(headless::fetch_once(client));
    match headless::render(&state, format) {
        Ok(output) => {
            print!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            Ok(ExitCode::FAILURE)
        }
    }
}
