//! Resolve a language code and fetch its alignment model.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{resolve_align_source, AlignModelSource, PipelineBundle};
use crate::error::{Error, Result};
use crate::model::{HubModelFiles, ModelFetcher};

/// A fetched alignment model together with its auxiliary artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LoadedAlignModel {
    /// Acoustic model with the label set taken from a pipeline bundle.
    Pipeline {
        bundle: PipelineBundle,
        weights: PathBuf,
        labels: Vec<String>,
    },
    /// CTC model and processor fetched from a hub repository.
    Hub {
        files: HubModelFiles,
        labels: Vec<String>,
    },
}

impl LoadedAlignModel {
    /// Output label vocabulary, ordered by emission index
    pub fn labels(&self) -> &[String] {
        match self {
            Self::Pipeline { labels, .. } => labels,
            Self::Hub { labels, .. } => labels,
        }
    }

    /// Local path of the acoustic model weights
    pub fn weights(&self) -> &Path {
        match self {
            Self::Pipeline { weights, .. } => weights,
            Self::Hub { files, .. } => &files.weights,
        }
    }

    /// Identifier of the model in its source registry
    pub fn model_name(&self) -> &str {
        match self {
            Self::Pipeline { bundle, .. } => bundle.bundle_name(),
            Self::Hub { files, .. } => &files.repo_id,
        }
    }
}

/// Resolve `language` against the model tables and fetch the match.
///
/// Pipeline hits fetch the bundle weights and take labels from the
/// bundle itself; hub hits fetch the repository snapshot and read
/// labels from its vocab.json. Either the model and its auxiliary
/// artifact both come back, or the call fails.
pub fn load_align_model<F: ModelFetcher>(language: &str, fetcher: &F) -> Result<LoadedAlignModel> {
    match resolve_align_source(language)? {
        AlignModelSource::Pipeline(bundle) => {
            info!(
                "Resolved {} to pipeline bundle {}",
                language,
                bundle.bundle_name()
            );

            let weights = fetcher.fetch_bundle(bundle)?;
            let labels = bundle.labels().iter().map(|s| s.to_string()).collect();

            Ok(LoadedAlignModel::Pipeline {
                bundle,
                weights,
                labels,
            })
        }
        AlignModelSource::HubRepo(repo_id) => {
            info!("Resolved {} to hub repository {}", language, repo_id);

            let files = fetcher.fetch_hub_repo(repo_id)?;
            let labels = read_vocab_labels(&files.vocab)?;

            Ok(LoadedAlignModel::Hub { files, labels })
        }
    }
}

/// Parse a wav2vec2 vocab.json into labels ordered by token index.
fn read_vocab_labels(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let map = value.as_object().ok_or_else(|| Error::InvalidVocab {
        path: path.to_path_buf(),
        reason: "expected a token-to-index object".to_string(),
    })?;

    let mut by_index: Vec<(u64, &str)> = Vec::with_capacity(map.len());
    for (token, index) in map {
        let index = index.as_u64().ok_or_else(|| Error::InvalidVocab {
            path: path.to_path_buf(),
            reason: format!("non-integer index for token {token:?}"),
        })?;
        by_index.push((index, token.as_str()));
    }

    by_index.sort_by_key(|(index, _)| *index);
    Ok(by_index
        .into_iter()
        .map(|(_, token)| token.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Recording fetcher: serves stub artifacts, no network.
    struct MockFetcher {
        calls: RefCell<Vec<String>>,
        hub_dir: tempfile::TempDir,
    }

    impl MockFetcher {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                hub_dir: tempfile::tempdir().unwrap(),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl ModelFetcher for MockFetcher {
        fn fetch_bundle(&self, bundle: PipelineBundle) -> Result<PathBuf> {
            self.calls
                .borrow_mut()
                .push(format!("bundle:{}", bundle.bundle_name()));
            Ok(self.hub_dir.path().join(bundle.weights_filename()))
        }

        fn fetch_hub_repo(&self, repo_id: &str) -> Result<HubModelFiles> {
            self.calls.borrow_mut().push(format!("hub:{repo_id}"));

            let vocab = self.hub_dir.path().join("vocab.json");
            std::fs::write(&vocab, r#"{"<pad>": 0, "|": 1, "a": 2, "b": 3}"#).unwrap();

            Ok(HubModelFiles {
                repo_id: repo_id.to_string(),
                config: self.hub_dir.path().join("config.json"),
                weights: self.hub_dir.path().join("pytorch_model.bin"),
                vocab,
                preprocessor_config: Some(self.hub_dir.path().join("preprocessor_config.json")),
                tokenizer_config: None,
                special_tokens_map: None,
            })
        }
    }

    #[test]
    fn en_loads_via_pipeline_path() {
        let fetcher = MockFetcher::new();
        let model = load_align_model("en", &fetcher).unwrap();

        match &model {
            LoadedAlignModel::Pipeline { bundle, labels, .. } => {
                assert_eq!(*bundle, PipelineBundle::Wav2Vec2AsrBase960h);
                assert_eq!(labels.len(), bundle.labels().len());
                assert_eq!(labels[2], "E");
            }
            LoadedAlignModel::Hub { .. } => panic!("en must not take the hub path"),
        }
        assert_eq!(fetcher.calls(), ["bundle:WAV2VEC2_ASR_BASE_960H"]);
    }

    #[test]
    fn ja_loads_via_hub_path() {
        let fetcher = MockFetcher::new();
        let model = load_align_model("ja", &fetcher).unwrap();

        match &model {
            LoadedAlignModel::Hub { files, labels } => {
                assert_eq!(files.repo_id, "jonatasgrosman/wav2vec2-large-xlsr-53-japanese");
                assert_eq!(labels, &["<pad>", "|", "a", "b"]);
            }
            LoadedAlignModel::Pipeline { .. } => panic!("ja must not take the pipeline path"),
        }
        assert_eq!(
            fetcher.calls(),
            ["hub:jonatasgrosman/wav2vec2-large-xlsr-53-japanese"]
        );
    }

    #[test]
    fn unsupported_language_makes_no_fetch_calls() {
        let fetcher = MockFetcher::new();
        let err = load_align_model("xx", &fetcher).unwrap_err();

        assert!(matches!(err, Error::UnsupportedLanguage(code) if code == "xx"));
        assert!(fetcher.calls().is_empty());
    }

    #[test]
    fn every_pipeline_code_stays_off_the_hub_path() {
        for (code, _) in crate::catalog::pipeline_align_models() {
            let fetcher = MockFetcher::new();
            load_align_model(code, &fetcher).unwrap();
            assert!(
                fetcher.calls().iter().all(|c| c.starts_with("bundle:")),
                "{code}"
            );
        }
    }

    #[test]
    fn every_hub_code_stays_off_the_pipeline_path() {
        for (code, _) in crate::catalog::hub_align_models() {
            let fetcher = MockFetcher::new();
            load_align_model(code, &fetcher).unwrap();
            assert!(
                fetcher.calls().iter().all(|c| c.starts_with("hub:")),
                "{code}"
            );
        }
    }

    #[test]
    fn vocab_labels_sorted_by_index() {
        let tmp = tempfile::tempdir().unwrap();
        let vocab = tmp.path().join("vocab.json");
        std::fs::write(&vocab, r#"{"z": 2, "a": 0, "m": 1}"#).unwrap();

        let labels = read_vocab_labels(&vocab).unwrap();
        assert_eq!(labels, ["a", "m", "z"]);
    }

    #[test]
    fn vocab_must_be_an_object() {
        let tmp = tempfile::tempdir().unwrap();
        let vocab = tmp.path().join("vocab.json");
        std::fs::write(&vocab, r#"["a", "b"]"#).unwrap();

        let err = read_vocab_labels(&vocab).unwrap_err();
        assert!(matches!(err, Error::InvalidVocab { .. }));
    }

    #[test]
    fn vocab_rejects_non_integer_indices() {
        let tmp = tempfile::tempdir().unwrap();
        let vocab = tmp.path().join("vocab.json");
        std::fs::write(&vocab, r#"{"a": "zero"}"#).unwrap();

        let err = read_vocab_labels(&vocab).unwrap_err();
        assert!(matches!(err, Error::InvalidVocab { .. }));
    }
}
