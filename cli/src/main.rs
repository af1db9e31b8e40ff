//! `filter-studio`: drive the image filter server from the command line.
//!
//! Runs the same client flows as the browser (upload, regenerate, select,
//! download, zoomed export) against a live server through `reqwest`.

mod config;
mod service;
mod source;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use client::actions::{self, SavedImage};
use client::error::ClientError;
use client::state::batch::BatchSession;
use client::state::viewer::{UploadOutcome, ViewerState};
use tracing_subscriber::EnvFilter;
use viewport::geom::{Point, Size};
use viewport::input::Button;

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, ServiceConfig, parameters_from_flags,
};
use crate::service::ReqwestFilterService;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
    #[error("http client failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("nothing to export: no image loaded")]
    NothingToExport,
}

#[derive(Parser, Debug)]
#[command(name = "filter-studio", about = "Image filter server CLI")]
struct Cli {
    #[arg(long, env = "FILTER_STUDIO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "FILTER_STUDIO_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[arg(long, env = "FILTER_STUDIO_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload one image and list its filter variants.
    Upload(UploadArgs),
    /// Upload several images one after another.
    Batch(BatchArgs),
    /// Save one filter variant as `filtered_image_<name>.jpg`.
    Download(DownloadArgs),
    /// Save the visible region of a zoomed/panned view as `zoomed_image.jpg`.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct UploadArgs {
    file: PathBuf,

    /// Filter parameter override, e.g. `--param sepia_intensity=0.8`. Repeatable.
    #[arg(long = "param")]
    params: Vec<String>,

    /// Variant to show after the upload.
    #[arg(long)]
    select: Option<String>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct DownloadArgs {
    file: PathBuf,

    #[arg(long)]
    filter: String,

    #[arg(long = "param")]
    params: Vec<String>,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct ExportArgs {
    file: PathBuf,

    /// Variant to export; defaults to the original.
    #[arg(long)]
    filter: Option<String>,

    /// Zoom steps from fit: positive zooms in, negative zooms out.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    zoom_steps: i32,

    /// Drag distance in container pixels.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_x: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_y: f64,

    /// Container width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Container height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::new(&cli.base_url, cli.timeout_secs, cli.connect_timeout_secs)?;
    let service = ReqwestFilterService::new(config)?;

    match cli.command {
        Command::Upload(args) => run_upload(&service, args).await,
        Command::Batch(args) => run_batch(&service, args).await,
        Command::Download(args) => run_download(&service, args).await,
        Command::Export(args) => run_export(&service, args).await,
    }
}

/// Upload `path` and, when flags were given, regenerate with those parameters.
async fn load_viewer(
    service: &ReqwestFilterService,
    viewer: &mut ViewerState,
    path: &std::path::Path,
    params: &[String],
) -> Result<(), CliError> {
    let parameters = parameters_from_flags(params)?;
    let file = source::load(path).await?;
    if let UploadOutcome::Failed(err) = actions::process_image(viewer, service, file).await {
        return Err(err.into());
    }
    if !parameters.is_default() {
        viewer.parameters = parameters;
        tracing::info!("regenerating with custom parameters");
        if let Some(UploadOutcome::Failed(err)) = actions::update_filter_parameters(viewer, service).await {
            return Err(err.into());
        }
    }
    Ok(())
}

fn select(viewer: &mut ViewerState, name: &str) -> Result<(), CliError> {
    viewer.select_variant(name)?;
    if let Some(text) = viewer.notice.text() {
        tracing::info!("{text}");
    }
    Ok(())
}

async fn run_upload(service: &ReqwestFilterService, args: UploadArgs) -> Result<(), CliError> {
    let mut viewer = ViewerState::new();
    load_viewer(service, &mut viewer, &args.file, &args.params).await?;
    if let Some(name) = args.select.as_deref() {
        select(&mut viewer, name)?;
    }

    let render = viewer.render();
    for line in &render.metadata {
        println!("{line}");
    }
    for tile in &render.tiles {
        let marker = if tile.active { '*' } else { ' ' };
        println!("{marker} {:<16} {} bytes", tile.display_name, tile.src.len());
    }
    Ok(())
}

async fn run_batch(service: &ReqwestFilterService, args: BatchArgs) -> Result<(), CliError> {
    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        match source::load(path).await {
            Ok(file) => files.push(file),
            Err(err) => tracing::warn!(path = %path.display(), "skipping: {err}"),
        }
    }

    let mut batch = BatchSession::new();
    let processed = batch.process_files(service, files).await;
    tracing::info!(processed, requested = args.files.len(), "batch finished");
    for card in batch.cards() {
        let variants = batch.entries()[card.index].session.gallery.variants().len();
        println!("#{} {} ({variants} filters)", card.index + 1, card.name);
    }
    Ok(())
}

async fn run_download(service: &ReqwestFilterService, args: DownloadArgs) -> Result<(), CliError> {
    let mut viewer = ViewerState::new();
    load_viewer(service, &mut viewer, &args.file, &args.params).await?;
    let saved = actions::download_variant(&viewer, service, &args.filter).await?;
    write(&args.out_dir, &saved).await
}

async fn run_export(service: &ReqwestFilterService, args: ExportArgs) -> Result<(), CliError> {
    let mut viewer = ViewerState::new();
    viewer.set_container(Size::new(args.width, args.height));
    load_viewer(service, &mut viewer, &args.file, &[]).await?;
    if let Some(name) = args.filter.as_deref() {
        select(&mut viewer, name)?;
    }

    for _ in 0..args.zoom_steps.unsigned_abs() {
        let stepped = if args.zoom_steps > 0 { viewer.viewport.zoom_in() } else { viewer.viewport.zoom_out() };
        if !stepped {
            tracing::warn!(zoom_steps = args.zoom_steps, "zoom limit reached; remaining steps ignored");
            break;
        }
    }
    if args.pan_x != 0.0 || args.pan_y != 0.0 {
        if viewer.viewport.on_pointer_down(Point::new(0.0, 0.0), Button::Primary) {
            if !viewer.viewport.on_pointer_move(Point::new(args.pan_x, args.pan_y)) {
                tracing::warn!("pan is clamped to the current view");
            }
            viewer.viewport.on_pointer_up();
        } else {
            tracing::warn!("pan ignored: the image is not zoomed in");
        }
    }
    let state = viewer.viewport.state();
    tracing::info!(zoom = state.zoom, pan_x = state.pan_x, pan_y = state.pan_y, "exporting view");

    let saved = actions::save_zoomed_image(&viewer, service).await?.ok_or(CliError::NothingToExport)?;
    write(&args.out_dir, &saved).await
}

async fn write(dir: &std::path::Path, saved: &SavedImage) -> Result<(), CliError> {
    let path = source::save(dir, &saved.file_name, &saved.bytes).await?;
    println!("{}", path.display());
    Ok(())
}
