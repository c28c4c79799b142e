mod error;
mod gallery;

use clap::Parser;
use error::GalleryError;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// fider-gallery: renders every common component with fixture props to a
/// static HTML page.
#[derive(Parser)]
#[command(name = "fider-gallery")]
struct Args {
    /// File to write the page to. Printed to stdout when omitted.
    #[arg(long, env = "FIDER_GALLERY_OUTPUT")]
    output: Option<PathBuf>,

    /// Page title.
    #[arg(long, default_value = "Fider components", env = "FIDER_GALLERY_TITLE")]
    title: String,

    /// Stylesheet providing the `ui` classes the components use.
    #[arg(
        long,
        default_value = gallery::SEMANTIC_UI_CSS,
        env = "FIDER_GALLERY_STYLESHEET"
    )]
    stylesheet: String,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the page when no output file is given
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn run(args: &Args) -> Result<(), GalleryError> {
    let page = gallery::render_page(&args.title, &args.stylesheet);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &page).map_err(|source| GalleryError::Io {
                path: path.clone(),
                source,
            })?;
            info!("Wrote gallery to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(page.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(GalleryError::Stdout)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    configure_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
