//! Ulimi Core - forced-alignment model resolution and fetching
//!
//! This crate resolves a language code to a pretrained wav2vec2 CTC
//! alignment model and fetches it from one of two sources: a packaged
//! pipeline bundle (weights plus a fixed label vocabulary) or a
//! HuggingFace Hub repository (CTC weights plus a processor front end).
//!
//! # Example
//!
//! ```ignore
//! use ulimi_core::{load_align_model, FetchConfig, ModelDownloader};
//!
//! let downloader = ModelDownloader::new(&FetchConfig::default())?;
//! let model = load_align_model("en", &downloader)?;
//! println!("{} labels at {:?}", model.labels().len(), model.weights());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;

pub use config::FetchConfig;
pub use error::{Error, Result};

// Catalog re-exports
pub use catalog::{
    hub_align_models, pipeline_align_models, resolve_align_source, supported_languages,
    AlignModelSource, PipelineBundle,
};

// Fetch/load re-exports
pub use model::{load_align_model, HubModelFiles, LoadedAlignModel, ModelDownloader, ModelFetcher};
