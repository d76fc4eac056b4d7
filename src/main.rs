use std::fs;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use naavi::app::app::{render_pathways, ChatApp};
use naavi::app::args::{Cli, Commands};
use naavi::app::settings::Settings;
use naavi::app::settings_io::{load_settings, save_settings, settings_path};
use naavi::engine::engine::Engine;
use naavi::engine::llm_client::LmStudioClient;
use naavi::engine::pathway_parser::parse_pathways;
use naavi::engine::perturbation::{RandomSource, RngSource};
use naavi::engine::session_store::InMemorySessionStore;

fn main() -> Result<()> {
    // Logs go to stderr so the conversation on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("naavi=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path);
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => chat(&settings),
        Commands::Parse { file, json } => parse(&file, json),
        Commands::Check => check(&settings),
        Commands::InitSettings => {
            save_settings(&path, &settings)?;
            println!("Settings written to {}", path.display());
            Ok(())
        }
    }
}

fn client(settings: &Settings) -> Result<LmStudioClient> {
    LmStudioClient::new(
        &settings.llm_base_url,
        &settings.model,
        settings.request_timeout_secs,
    )
    .context("building LLM client")
}

fn chat(settings: &Settings) -> Result<()> {
    let rng: Box<dyn RandomSource + Send> = match settings.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    };

    let engine = Engine::new(
        Box::new(InMemorySessionStore::new()),
        rng,
        Box::new(client(settings)?),
        settings.engine_config(),
    );

    tracing::info!(endpoint = %settings.llm_base_url, model = %settings.model, "starting chat");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    ChatApp::new(engine).run(stdin.lock(), &mut stdout)
}

fn parse(file: &std::path::Path, json: bool) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("reading model output from {}", file.display()))?;
    let pathways = parse_pathways(&raw);

    tracing::info!(count = pathways.len(), "pathways parsed");

    let mut stdout = io::stdout();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &pathways)?;
        println!();
    } else {
        render_pathways(&mut stdout, &pathways)?;
    }
    Ok(())
}

fn check(settings: &Settings) -> Result<()> {
    let status = client(settings)?.test_connection()?;
    println!("{status}");
    Ok(())
}
