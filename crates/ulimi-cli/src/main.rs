//! Ulimi CLI - fetch forced-alignment models by language code

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use ulimi_core::{
    hub_align_models, load_align_model, pipeline_align_models, FetchConfig, LoadedAlignModel,
    ModelDownloader, Result,
};

/// Ulimi - forced-alignment model fetcher
///
/// Resolves the pretrained wav2vec2 CTC alignment model for a language
/// and downloads it, along with its label vocabulary or processor.
///
/// Examples:
///   ulimi en              # Fetch the English alignment model
///   ulimi ja              # Fetch the Japanese alignment model
///   ulimi languages       # List supported language codes
#[derive(Parser)]
#[command(
    name = "ulimi",
    about = "Forced-alignment model fetcher",
    version = env!("CARGO_PKG_VERSION"),
    arg_required_else_help = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language code to fetch an alignment model for (e.g. "en", "ja")
    language: Option<String>,

    /// Directory to store downloaded bundle weights
    #[arg(short, long, global = true, env = "ULIMI_MODELS_DIR", value_name = "PATH")]
    models_dir: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Suppress all output except results
    #[arg(long, global = true)]
    quiet: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported languages and their model sources
    #[command(name = "languages", alias = "langs")]
    Languages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt::init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match (cli.command, cli.language) {
        (Some(Commands::Languages), _) => {
            print_languages();
            Ok(())
        }
        (None, Some(language)) => fetch(&language, cli.models_dir, cli.json, cli.quiet),
        // arg_required_else_help leaves no way here, but clap owns that contract
        (None, None) => Ok(()),
    }
}

fn fetch(language: &str, models_dir: Option<PathBuf>, json: bool, quiet: bool) -> Result<()> {
    let mut config = FetchConfig::default();
    if let Some(dir) = models_dir {
        config.models_dir = dir;
    }

    let downloader = ModelDownloader::new(&config)?;
    let model = load_align_model(language, &downloader)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else if !quiet {
        print_summary(language, &model);
    }

    Ok(())
}

fn print_summary(language: &str, model: &LoadedAlignModel) {
    println!("language  {language}");
    println!("model     {}", model.model_name());
    println!("weights   {}", model.weights().display());
    match model {
        LoadedAlignModel::Pipeline { labels, .. } => {
            println!("labels    {} (from bundle)", labels.len());
        }
        LoadedAlignModel::Hub { files, labels } => {
            println!("labels    {} (from vocab.json)", labels.len());
            println!("processor {}", files.vocab.display());
        }
    }
}

fn print_languages() {
    println!("Pipeline bundles:");
    for (code, bundle) in pipeline_align_models() {
        println!("  {code}  {}", bundle.bundle_name());
    }
    println!();
    println!("Hub repositories:");
    for (code, repo) in hub_align_models() {
        println!("  {code}  {repo}");
    }
}
