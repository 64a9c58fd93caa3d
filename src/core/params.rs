use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{ResampleFilter, TargetSize};

/// Directory both procedures read sources from and write outputs to
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Preparation parameters shared by the crop and download procedures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepParams {
    /// Exact output dimensions, fixed across the run
    pub target: TargetSize,
    pub filter: ResampleFilter,
    pub images_dir: PathBuf,
}

impl Default for PrepParams {
    fn default() -> Self {
        Self {
            target: TargetSize::default(),
            filter: ResampleFilter::Lanczos3,
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
        }
    }
}
