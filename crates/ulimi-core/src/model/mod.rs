//! Model fetching and loading

mod download;
mod loader;

use std::path::PathBuf;

use crate::catalog::PipelineBundle;
use crate::error::Result;

pub use download::{HubModelFiles, ModelDownloader};
pub use loader::{load_align_model, LoadedAlignModel};

/// Fetch backend behind the loader.
///
/// One method per model source. [`ModelDownloader`] is the production
/// implementation; tests substitute a recording mock.
pub trait ModelFetcher {
    /// Fetch a pipeline bundle's weights, returning the local path.
    fn fetch_bundle(&self, bundle: PipelineBundle) -> Result<PathBuf>;

    /// Fetch a hub repository's model and processor files.
    fn fetch_hub_repo(&self, repo_id: &str) -> Result<HubModelFiles>;
}
