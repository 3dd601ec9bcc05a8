use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use modhash_proof::config::{LoggingSettings, Settings};
use modhash_proof::schema::SchemaValidator;
use modhash_proof::{digest, Comparator, Proof, Prover};
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Schema picked up from the working directory when none is configured.
const DEFAULT_SCHEMA_FILE: &str = "schema.json";

const EXIT_NOT_MATCHED: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "modhash")]
#[command(about = "Find out whether two parties hold the same document without exchanging it", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, env = "MODHASH_CONFIG")]
    config: Option<PathBuf>,

    /// JSON schema documents are validated against
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a proof for a document
    Generate {
        /// Document to commit to
        #[arg(short, long)]
        path: PathBuf,

        /// Write the proof here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check a document against a proof received from another party
    Compare {
        /// Local document
        #[arg(short, long)]
        path: PathBuf,

        /// Proof record received from the other party
        #[arg(long)]
        proof: PathBuf,
    },
}

enum Outcome {
    Generated,
    Matched,
    NotMatched,
}

fn init_tracing(logging: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}

fn ensure_exists(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("unable to locate file '{}'", path.display()),
    ))
}

fn schema_path(cli_schema: Option<PathBuf>, settings: &Settings) -> Option<PathBuf> {
    cli_schema
        .or_else(|| settings.schema.path.clone())
        .or_else(|| {
            let fallback = PathBuf::from(DEFAULT_SCHEMA_FILE);
            fallback.exists().then_some(fallback)
        })
}

fn check_document(
    document: &Path,
    schema: Option<&Path>,
    enforce: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(schema) = schema else {
        info!("No schema configured, skipping document validation");
        return Ok(());
    };

    let validator = SchemaValidator::from_file(schema)?;
    let report = validator.validate_file(document)?;

    if report.is_valid() {
        info!("The document is valid");
        return Ok(());
    }

    warn!("The document is not valid. See errors:");
    for violation in &report.violations {
        warn!("- {violation}");
    }

    if enforce {
        return Err(format!(
            "document '{}' failed validation against '{}'",
            document.display(),
            schema.display()
        )
        .into());
    }

    Ok(())
}

fn run(cli: Cli, settings: &Settings) -> Result<Outcome, Box<dyn std::error::Error>> {
    let schema = schema_path(cli.schema, settings);

    if settings.schema.enforce && schema.is_none() {
        return Err(format!(
            "schema.enforce is set but no schema was given (--schema, schema.path or ./{DEFAULT_SCHEMA_FILE})"
        )
        .into());
    }

    match cli.command {
        Commands::Generate { path, out } => {
            ensure_exists(&path)?;
            check_document(&path, schema.as_deref(), settings.schema.enforce)?;

            info!("Creating proof");
            let secret = digest::sha256_file(&path)?;
            let proof = Prover::from_global()?.generate(&secret);
            let json = proof.to_json_pretty()?;

            match out {
                Some(out) => {
                    fs::write(&out, format!("{json}\n"))?;
                    info!("Proof written to {}", out.display());
                }
                None => println!("{json}"),
            }

            Ok(Outcome::Generated)
        }

        Commands::Compare { path, proof } => {
            ensure_exists(&path)?;
            ensure_exists(&proof)?;
            check_document(&path, schema.as_deref(), settings.schema.enforce)?;

            info!("Loading intel file");
            let secret = digest::sha256_file(&path)?;

            info!("Deserializing proof");
            let received = Proof::from_json(&fs::read_to_string(&proof)?)?;

            if Comparator::from_global()?.compare(&secret, &received)? {
                info!("Files matched");
                Ok(Outcome::Matched)
            } else {
                info!("Files did not match");
                Ok(Outcome::NotMatched)
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    init_tracing(&settings.logging);

    match run(cli, &settings) {
        Ok(Outcome::Generated | Outcome::Matched) => ExitCode::SUCCESS,
        Ok(Outcome::NotMatched) => ExitCode::from(EXIT_NOT_MATCHED),
        Err(e) => {
            error!("{e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
