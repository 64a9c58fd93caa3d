use tracing_subscriber::EnvFilter;

use gamethumbs::io::writers::report::write_report;
use gamethumbs::{BatchReport, Manifest, PrepParams, TargetSize, process_local_entries};

use super::args::{CliArgs, Command, CommonArgs};
use super::errors::AppError;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_target_size(size: &str) -> Result<TargetSize, AppError> {
    match size.parse::<TargetSize>() {
        Ok(target) => Ok(target),
        Err(gamethumbs::Error::ZeroSize { .. }) => Err(AppError::ZeroSize {
            size: size.to_string(),
        }),
        Err(_) => Err(AppError::InvalidSize {
            size: size.to_string(),
        }),
    }
}

fn params_from(common: &CommonArgs) -> Result<PrepParams, AppError> {
    Ok(PrepParams {
        target: parse_target_size(&common.size)?,
        filter: common.filter,
        images_dir: common.images_dir.clone(),
    })
}

fn load_manifest(common: &CommonArgs) -> Result<Manifest, AppError> {
    match &common.manifest {
        Some(path) => Ok(Manifest::load(path)?),
        None => Ok(Manifest::builtin()),
    }
}

fn finish(common: &CommonArgs, report: &BatchReport) -> Result<(), AppError> {
    if let Some(path) = &common.report {
        write_report(path, report)?;
    }
    Ok(())
}

fn run_crop(common: &CommonArgs) -> Result<(), AppError> {
    let params = params_from(common)?;
    let manifest = load_manifest(common)?;
    let report = process_local_entries(&manifest.local, &params)?;
    finish(common, &report)
}

#[cfg(feature = "remote")]
fn run_download(common: &CommonArgs, url: Option<&str>) -> Result<(), AppError> {
    use gamethumbs::{HttpFetcher, process_remote_entries};
    use tracing::info;

    let params = params_from(common)?;
    let mut manifest = load_manifest(common)?;
    if let Some(url) = url {
        info!("Overriding every remote URL with {}", url);
        manifest = manifest.with_remote_url(url);
    }
    let fetcher = HttpFetcher::new()?;
    let report = process_remote_entries(&fetcher, &manifest.remote, &params)?;
    finish(common, &report)
}

#[cfg(not(feature = "remote"))]
fn run_download(_common: &CommonArgs, _url: Option<&str>) -> Result<(), AppError> {
    Err(AppError::RemoteDisabled)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    match &args.command {
        Command::Crop(common) => run_crop(common)?,
        Command::Download { common, url } => run_download(common, url.as_deref())?,
    }

    Ok(())
}
