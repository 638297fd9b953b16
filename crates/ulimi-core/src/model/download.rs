//! Model downloading from the pipeline weight host and HuggingFace Hub

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use hf_hub::api::sync::Api;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::PipelineBundle;
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::model::ModelFetcher;

const USER_AGENT: &str = "ulimi/0.1.0";

/// Files fetched for a hub-hosted CTC model.
///
/// `config` + `weights` form the acoustic model; the remaining files
/// form the processor front end. Optional entries are simply absent
/// from some repositories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubModelFiles {
    pub repo_id: String,
    pub config: PathBuf,
    pub weights: PathBuf,
    pub vocab: PathBuf,
    pub preprocessor_config: Option<PathBuf>,
    pub tokenizer_config: Option<PathBuf>,
    pub special_tokens_map: Option<PathBuf>,
}

/// Downloader over both model sources
pub struct ModelDownloader {
    api: Api,
    models_dir: PathBuf,
    http_client: Client,
}

impl ModelDownloader {
    /// Create a new downloader
    pub fn new(config: &FetchConfig) -> Result<Self> {
        // Ensure the bundle directory exists; the hub client owns its own cache
        std::fs::create_dir_all(&config.models_dir)?;

        let api = Api::new().map_err(|e| Error::HfHubError(e.to_string()))?;
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api,
            models_dir: config.models_dir.clone(),
            http_client,
        })
    }

    /// Local directory for a bundle's files
    pub fn bundle_dir(&self, bundle: PipelineBundle) -> PathBuf {
        self.models_dir.join(bundle.dir_name())
    }

    /// Check if a bundle's weights are already present
    pub fn is_bundle_downloaded(&self, bundle: PipelineBundle) -> bool {
        self.bundle_dir(bundle)
            .join(bundle.weights_filename())
            .exists()
    }

    /// Download a file directly over HTTP
    fn download_file_http(&self, url: &str, dest: &Path) -> Result<()> {
        debug!("Downloading from URL: {}", url);

        let response = self
            .http_client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()?;

        if !response.status().is_success() {
            return Err(Error::DownloadFailed {
                url: url.to_string(),
                status: response.status(),
            });
        }

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let bytes = response.bytes()?;
        let mut file = File::create(dest)?;
        file.write_all(&bytes)?;

        debug!("Downloaded {} bytes to {:?}", bytes.len(), dest);
        Ok(())
    }

    fn hub_get(&self, repo_id: &str, filename: &str) -> Result<PathBuf> {
        self.api
            .model(repo_id.to_string())
            .get(filename)
            .map_err(|e| Error::HfHubError(format!("{repo_id}/{filename}: {e}")))
    }

    fn hub_get_optional(&self, repo_id: &str, filename: &str) -> Option<PathBuf> {
        self.api.model(repo_id.to_string()).get(filename).ok()
    }
}

impl ModelFetcher for ModelDownloader {
    fn fetch_bundle(&self, bundle: PipelineBundle) -> Result<PathBuf> {
        let dest = self.bundle_dir(bundle).join(bundle.weights_filename());

        if dest.exists() {
            debug!("Bundle weights already present: {:?}", dest);
            return Ok(dest);
        }

        info!("Downloading {} to {:?}", bundle.bundle_name(), dest);

        let pb = spinner(format!("Downloading {}", bundle.display_name()));
        self.download_file_http(&bundle.weights_url(), &dest)?;
        pb.finish_with_message(format!("Downloaded {}", bundle.display_name()));

        Ok(dest)
    }

    fn fetch_hub_repo(&self, repo_id: &str) -> Result<HubModelFiles> {
        info!("Fetching {} from the hub", repo_id);

        let pb = spinner(format!("Fetching {repo_id}"));

        let config = self.hub_get(repo_id, "config.json")?;
        let vocab = self.hub_get(repo_id, "vocab.json")?;

        // Newer repos publish safetensors; older ones only the pickle weights
        let weights = match self.hub_get_optional(repo_id, "model.safetensors") {
            Some(path) => path,
            None => self.hub_get(repo_id, "pytorch_model.bin")?,
        };

        let preprocessor_config = self.hub_get_optional(repo_id, "preprocessor_config.json");
        let tokenizer_config = self.hub_get_optional(repo_id, "tokenizer_config.json");
        let special_tokens_map = self.hub_get_optional(repo_id, "special_tokens_map.json");

        pb.finish_with_message(format!("Fetched {repo_id}"));

        Ok(HubModelFiles {
            repo_id: repo_id.to_string(),
            config,
            weights,
            vocab,
            preprocessor_config,
            tokenizer_config,
            special_tokens_map,
        })
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb
}
