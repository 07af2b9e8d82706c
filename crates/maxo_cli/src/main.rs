//! maxo: The maxo lang command-line interface.
//!
//! Usage:
//!   maxo [options] [file...]
//!
//! Each file is scanned and printed back with every word reversed.

use clap::Parser as ClapParser;
use maxo_lexer::{ItemKind, Lexer};
use maxo_options::{parse_config_file, LexerOptions, CONFIG_FILE_NAME};
use maxo_parser::{transform_async, TransformError};
use miette::{IntoDiagnostic, WrapErr};
use std::io::Write;
use std::path::Path;
use std::process;

const VERSION: &str = "MAXOv0.0.1";
const USAGE_HINT: &str = "type -h or --help for help on usage";

/// Exit code for unreadable files and bad configuration.
const EXIT_FAILURE: i32 = 1;
/// Exit code for input the lexer rejected.
const EXIT_SCAN_ERROR: i32 = 2;

#[derive(ClapParser, Debug)]
#[command(
    name = "maxo",
    about = "maxo lang - scan text and reverse its words",
    disable_version_flag = true
)]
struct Cli {
    /// Source files to scan.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// View the version of maxo lang.
    #[arg(short = 'v', long)]
    version: bool,

    /// Print the scanned items instead of the transformed text.
    #[arg(long)]
    tokens: bool,

    /// Path to a maxo.json config file.
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if cli.version {
        println!("{}", VERSION);
        return;
    }

    if cli.files.is_empty() {
        eprintln!("{}", USAGE_HINT);
        process::exit(EXIT_FAILURE);
    }

    let exit_code = run(&cli);
    process::exit(exit_code);
}

/// Install a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(cli: &Cli) -> i32 {
    let options = match resolve_options(cli) {
        Ok(options) => options,
        Err(report) => {
            print_report(&report);
            return EXIT_FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new()
        .into_diagnostic()
        .wrap_err("failed to start the async runtime")
    {
        Ok(runtime) => runtime,
        Err(report) => {
            print_report(&report);
            return EXIT_FAILURE;
        }
    };

    runtime.block_on(run_files(cli, &options))
}

/// `--config` wins; otherwise use maxo.json from the working directory if present.
fn resolve_options(cli: &Cli) -> miette::Result<LexerOptions> {
    let path = match cli.config.as_deref() {
        Some(path) => path,
        None if Path::new(CONFIG_FILE_NAME).exists() => CONFIG_FILE_NAME,
        None => return Ok(LexerOptions::default()),
    };
    tracing::debug!(path, "loading config");
    let config = parse_config_file(path).into_diagnostic()?;
    Ok(config.lexer_options())
}

/// Process every file; the exit code is the worst outcome seen.
async fn run_files(cli: &Cli, options: &LexerOptions) -> i32 {
    let mut exit_code = 0;
    for file in &cli.files {
        let source = match tokio::fs::read_to_string(file)
            .await
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read '{}'", file))
        {
            Ok(source) => source,
            Err(report) => {
                print_report(&report);
                exit_code = exit_code.max(EXIT_FAILURE);
                continue;
            }
        };

        let code = if cli.tokens {
            print_tokens(file, source, options).await
        } else {
            print_transformed(file, &source, options).await
        };
        exit_code = exit_code.max(code);
    }
    exit_code
}

async fn print_transformed(file: &str, source: &str, options: &LexerOptions) -> i32 {
    match transform_async(source, options).await {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
                print_report(&miette::Report::msg(format!("failed to write output: {}", err)));
                return EXIT_FAILURE;
            }
            0
        }
        Err(err) => match err.to_diagnostic(file) {
            Some(diag) => {
                print_report(&miette::Report::new(diag));
                EXIT_SCAN_ERROR
            }
            None => {
                print_report(&miette::Report::msg(err.to_string()));
                EXIT_FAILURE
            }
        },
    }
}

/// Print items as they arrive from the stream.
async fn print_tokens(file: &str, source: String, options: &LexerOptions) -> i32 {
    let mut lexer = Lexer::spawn(source, options);
    let mut code = 0;
    while let Some(item) = lexer.next_item().await {
        println!("{}", item);
        if item.kind == ItemKind::Error {
            let err = TransformError::Scan {
                position: item.position,
                message: item.value,
            };
            if let Some(diag) = err.to_diagnostic(file) {
                print_report(&miette::Report::new(diag));
            }
            code = EXIT_SCAN_ERROR;
        }
    }
    if let Err(err) = lexer.finish().await {
        print_report(&miette::Report::msg(err.to_string()));
        code = code.max(EXIT_FAILURE);
    }
    code
}

fn print_report(report: &miette::Report) {
    eprintln!("{:?}", report);
}
