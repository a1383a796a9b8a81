mod render;
mod transport;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use triage::{ApiConfig, Classifier, DEFAULT_API_BASE_URL, FileUpload, Submission, SubmitError};

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Submit(#[from] SubmitError),
    #[error("http client build failed: {0}")]
    HttpClientBuild(#[from] reqwest::Error),
    #[error("failed to read {path}: {source}")]
    ReadInput { path: String, source: io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "triage-cli", version, about = "Classify emails against the triage backend")]
struct Cli {
    #[arg(long, env = "TRIAGE_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "TRIAGE_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    request_timeout_secs: u64,

    #[arg(long, env = "TRIAGE_CONNECT_TIMEOUT_SECS", default_value_t = 10)]
    connect_timeout_secs: u64,

    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,

    #[arg(short, long, global = true, help = "Log request details to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify email text or a `.txt`/`.pdf` file.
    Classify(ClassifyArgs),
    /// Check that the backend accepts a file upload.
    Validate {
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    #[arg(long, help = "Email text, or - to read it from stdin")]
    text: Option<String>,

    #[arg(long, help = "File to upload; takes precedence over --text")]
    file: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Run the file through /validate first")]
    validate: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let transport = ReqwestTransport::new(
        Duration::from_secs(cli.request_timeout_secs),
        Duration::from_secs(cli.connect_timeout_secs),
    )?;
    let classifier = Classifier::new(transport, ApiConfig::new(&cli.base_url));

    match cli.command {
        Command::Classify(args) => run_classify(&classifier, args, cli.json).await,
        Command::Validate { file } => run_validate(&classifier, &file, cli.json).await,
    }
}

async fn run_classify(
    classifier: &Classifier<ReqwestTransport>,
    args: ClassifyArgs,
    json: bool,
) -> Result<(), CliError> {
    let text = match args.text.as_deref() {
        Some("-") => read_stdin()?,
        Some(text) => text.to_owned(),
        None => String::new(),
    };
    let file = args.file.as_deref().map(load_upload).transpose()?;
    if file.is_some() && !text.trim().is_empty() {
        tracing::warn!("both --file and --text given; sending the file");
    }

    let result = if args.validate {
        let submission = Submission::from_inputs(&text, file)?;
        if !submission.is_file() {
            tracing::warn!("--validate only applies to --file; classifying text directly");
        }
        classifier.process(&submission).await?
    } else {
        classifier.submit(&text, file).await?
    };

    if json {
        render::print_json(&result)?;
    } else {
        println!("{}", render::classification_text(&result));
    }
    Ok(())
}

async fn run_validate(
    classifier: &Classifier<ReqwestTransport>,
    path: &Path,
    json: bool,
) -> Result<(), CliError> {
    let file = load_upload(path)?;
    let report = classifier.validate(&file).await?;
    if json {
        render::print_json(&report)?;
    } else {
        println!("{}: {}", file.name, report.status);
    }
    Ok(())
}

fn load_upload(path: &Path) -> Result<FileUpload, CliError> {
    FileUpload::from_path(path).map_err(|source| CliError::ReadInput {
        path: path.display().to_string(),
        source,
    })
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| CliError::ReadInput {
            path: "stdin".to_owned(),
            source,
        })?;
    Ok(buf)
}
