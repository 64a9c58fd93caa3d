//! High-level library API: prepare single images from disk or URLs, and run whole entry
//! lists with per-entry isolation. Prefer these entrypoints over the low-level processing
//! modules when integrating gamethumbs.
use std::path::Path;

use image::DynamicImage;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::core::manifest::{LocalEntry, RemoteEntry};
use crate::core::params::PrepParams;
use crate::core::processing::pipeline::{crop_and_resize, stretch_resize_bytes};
use crate::error::{Error, Result};
use crate::io::fetch::Fetcher;
use crate::io::reader::read_image;
use crate::io::writers::png::write_png;
use crate::types::{ItemOutcome, Procedure};

#[cfg(test)]
mod tests;

/// What happened to one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    pub procedure: Procedure,
    pub output: String,
    pub outcome: ItemOutcome,
    /// Warning or error text for skipped and failed entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Summary of one pass over an entry list
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub items: Vec<ItemReport>,
}

impl BatchReport {
    fn record(&mut self, item: ItemReport) {
        match item.outcome {
            ItemOutcome::Processed => self.processed += 1,
            ItemOutcome::Skipped => self.skipped += 1,
            ItemOutcome::Failed => self.errors += 1,
        }
        self.items.push(item);
    }
}

/// Create the images directory if it does not exist yet
pub fn ensure_images_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
        info!("Created images directory {:?}", dir);
    }
    Ok(())
}

/// Flatten, centered-crop and resize `input`, writing a PNG to `output`
pub fn prepare_local_image(input: &Path, output: &Path, params: &PrepParams) -> Result<()> {
    if !input.exists() {
        return Err(Error::MissingSource {
            path: input.to_path_buf(),
        });
    }
    let img = read_image(input)?;
    let prepared = crop_and_resize(img, params.target, params.filter)?;
    write_png(output, &DynamicImage::ImageRgb8(prepared))
}

/// Download `url`, stretch it to the target size and write a PNG to `output`.
/// Nothing is written unless the response status is a success.
pub fn download_remote_image<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    output: &Path,
    params: &PrepParams,
) -> Result<()> {
    let resp = fetcher.get(url)?;
    if !resp.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: resp.status,
        });
    }
    let png = stretch_resize_bytes(&resp.body, params.target, params.filter)?;
    std::fs::write(output, png)?;
    Ok(())
}

/// Run one local entry. Failures are logged and reported, never returned.
pub fn process_local_entry(entry: &LocalEntry, params: &PrepParams) -> ItemReport {
    let input = params.images_dir.join(&entry.source);
    let output = params.images_dir.join(&entry.output);

    let (outcome, message) = match prepare_local_image(&input, &output, params) {
        Ok(()) => {
            info!("Successfully processed {}", output.display());
            (ItemOutcome::Processed, None)
        }
        Err(e @ Error::MissingSource { .. }) => {
            warn!("{}", e);
            (ItemOutcome::Skipped, Some(e.to_string()))
        }
        Err(e) => {
            error!("Error processing {}: {}", input.display(), e);
            (ItemOutcome::Failed, Some(e.to_string()))
        }
    };

    ItemReport {
        procedure: Procedure::Crop,
        output: entry.output.clone(),
        outcome,
        message,
    }
}

/// Run one remote entry. Failures are logged and reported, never returned.
pub fn process_remote_entry<F: Fetcher + ?Sized>(
    fetcher: &F,
    entry: &RemoteEntry,
    params: &PrepParams,
) -> ItemReport {
    let output = params.images_dir.join(&entry.output);

    let (outcome, message) = match download_remote_image(fetcher, &entry.url, &output, params) {
        Ok(()) => {
            info!("Successfully downloaded {}", output.display());
            (ItemOutcome::Processed, None)
        }
        Err(e) => {
            error!("Error downloading {}: {}", entry.output, e);
            (ItemOutcome::Failed, Some(e.to_string()))
        }
    };

    ItemReport {
        procedure: Procedure::Download,
        output: entry.output.clone(),
        outcome,
        message,
    }
}

/// Crop and resize every local entry in order. Only failing to create the images
/// directory aborts the run.
pub fn process_local_entries(entries: &[LocalEntry], params: &PrepParams) -> Result<BatchReport> {
    ensure_images_dir(&params.images_dir)?;
    info!(
        "Preparing {} local images at {} in {:?}",
        entries.len(),
        params.target,
        params.images_dir
    );

    let mut report = BatchReport::default();
    for entry in entries {
        report.record(process_local_entry(entry, params));
    }
    log_summary(&report);
    Ok(report)
}

/// Download and resize every remote entry in order
pub fn process_remote_entries<F: Fetcher + ?Sized>(
    fetcher: &F,
    entries: &[RemoteEntry],
    params: &PrepParams,
) -> Result<BatchReport> {
    ensure_images_dir(&params.images_dir)?;
    info!(
        "Downloading {} images at {} into {:?}",
        entries.len(),
        params.target,
        params.images_dir
    );

    let mut report = BatchReport::default();
    for entry in entries {
        report.record(process_remote_entry(fetcher, entry, params));
    }
    log_summary(&report);
    Ok(report)
}

fn log_summary(report: &BatchReport) {
    info!(
        "Done. Processed: {}, Skipped: {}, Errors: {}",
        report.processed, report.skipped, report.errors
    );
}
