//! Model catalog: pipeline bundle metadata and the language tables.
//!
//! This module is the canonical place for alignment-model metadata and
//! language-code resolution. Resolution is pure table lookup; all I/O
//! lives in [`crate::model`].

mod bundle;
mod language;

pub use bundle::PipelineBundle;
pub use language::{
    hub_align_models, pipeline_align_models, resolve_align_source, supported_languages,
    AlignModelSource,
};
