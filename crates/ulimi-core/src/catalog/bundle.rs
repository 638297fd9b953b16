//! Pipeline bundle metadata
//!
//! A bundle packages pretrained wav2vec2 CTC weights together with the
//! label vocabulary the model emits. The upstream registry addresses
//! bundles by name; the enum keeps that mapping explicit and typed, so
//! an unknown name fails as a catalog error rather than at fetch time.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const WEIGHTS_BASE_URL: &str = "https://download.pytorch.org/torchaudio/models";

/// Available pipeline alignment bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineBundle {
    /// English wav2vec2 base, fine-tuned on 960h LibriSpeech
    #[serde(rename = "WAV2VEC2_ASR_BASE_960H")]
    Wav2Vec2AsrBase960h,
    /// French VoxPopuli base, fine-tuned on 10k hours
    #[serde(rename = "VOXPOPULI_ASR_BASE_10K_FR")]
    VoxPopuliAsrBase10kFr,
    /// German VoxPopuli base, fine-tuned on 10k hours
    #[serde(rename = "VOXPOPULI_ASR_BASE_10K_DE")]
    VoxPopuliAsrBase10kDe,
    /// Spanish VoxPopuli base, fine-tuned on 10k hours
    #[serde(rename = "VOXPOPULI_ASR_BASE_10K_ES")]
    VoxPopuliAsrBase10kEs,
    /// Italian VoxPopuli base, fine-tuned on 10k hours
    #[serde(rename = "VOXPOPULI_ASR_BASE_10K_IT")]
    VoxPopuliAsrBase10kIt,
}

impl PipelineBundle {
    /// Canonical bundle name in the upstream pipeline registry
    pub fn bundle_name(&self) -> &'static str {
        match self {
            Self::Wav2Vec2AsrBase960h => "WAV2VEC2_ASR_BASE_960H",
            Self::VoxPopuliAsrBase10kFr => "VOXPOPULI_ASR_BASE_10K_FR",
            Self::VoxPopuliAsrBase10kDe => "VOXPOPULI_ASR_BASE_10K_DE",
            Self::VoxPopuliAsrBase10kEs => "VOXPOPULI_ASR_BASE_10K_ES",
            Self::VoxPopuliAsrBase10kIt => "VOXPOPULI_ASR_BASE_10K_IT",
        }
    }

    /// Get human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Wav2Vec2AsrBase960h => "Wav2Vec2 ASR Base 960h",
            Self::VoxPopuliAsrBase10kFr => "VoxPopuli ASR Base 10k (fr)",
            Self::VoxPopuliAsrBase10kDe => "VoxPopuli ASR Base 10k (de)",
            Self::VoxPopuliAsrBase10kEs => "VoxPopuli ASR Base 10k (es)",
            Self::VoxPopuliAsrBase10kIt => "VoxPopuli ASR Base 10k (it)",
        }
    }

    /// Get local directory name
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Wav2Vec2AsrBase960h => "wav2vec2-asr-base-960h",
            Self::VoxPopuliAsrBase10kFr => "voxpopuli-asr-base-10k-fr",
            Self::VoxPopuliAsrBase10kDe => "voxpopuli-asr-base-10k-de",
            Self::VoxPopuliAsrBase10kEs => "voxpopuli-asr-base-10k-es",
            Self::VoxPopuliAsrBase10kIt => "voxpopuli-asr-base-10k-it",
        }
    }

    /// Weight file name on the pipeline data host
    pub fn weights_filename(&self) -> &'static str {
        match self {
            Self::Wav2Vec2AsrBase960h => "wav2vec2_fairseq_base_ls960_asr_ls960.pth",
            Self::VoxPopuliAsrBase10kFr => "wav2vec2_voxpopuli_base_10k_asr_fr.pt",
            Self::VoxPopuliAsrBase10kDe => "wav2vec2_voxpopuli_base_10k_asr_de.pt",
            Self::VoxPopuliAsrBase10kEs => "wav2vec2_voxpopuli_base_10k_asr_es.pt",
            Self::VoxPopuliAsrBase10kIt => "wav2vec2_voxpopuli_base_10k_asr_it.pt",
        }
    }

    /// Full download URL for the bundle weights
    pub fn weights_url(&self) -> String {
        format!("{}/{}", WEIGHTS_BASE_URL, self.weights_filename())
    }

    /// Expected sample rate of model input audio
    pub fn sample_rate(&self) -> u32 {
        16_000
    }

    /// Output label vocabulary, ordered by emission index.
    ///
    /// Index 0 is the CTC blank, index 1 the word delimiter.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Wav2Vec2AsrBase960h => LABELS_LIBRISPEECH,
            Self::VoxPopuliAsrBase10kFr => LABELS_VOXPOPULI_FR,
            Self::VoxPopuliAsrBase10kDe => LABELS_VOXPOPULI_DE,
            Self::VoxPopuliAsrBase10kEs => LABELS_VOXPOPULI_ES,
            Self::VoxPopuliAsrBase10kIt => LABELS_VOXPOPULI_IT,
        }
    }

    /// Look a bundle up by its registry name.
    ///
    /// The language table stores typed variants, so this is only hit by
    /// callers arriving with a raw name string.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|bundle| bundle.bundle_name() == name)
            .ok_or_else(|| Error::UnknownBundle(name.to_string()))
    }

    /// Get all available bundles
    pub fn all() -> &'static [PipelineBundle] {
        &[
            Self::Wav2Vec2AsrBase960h,
            Self::VoxPopuliAsrBase10kFr,
            Self::VoxPopuliAsrBase10kDe,
            Self::VoxPopuliAsrBase10kEs,
            Self::VoxPopuliAsrBase10kIt,
        ]
    }
}

impl std::fmt::Display for PipelineBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

const LABELS_LIBRISPEECH: &[&str] = &[
    "-", "|", "E", "T", "A", "O", "N", "I", "H", "S", "R", "D", "L", "U", "M", "W", "C", "F", "G",
    "Y", "P", "B", "V", "K", "'", "X", "J", "Q", "Z",
];

const LABELS_VOXPOPULI_FR: &[&str] = &[
    "-", "|", "e", "s", "n", "i", "t", "r", "a", "o", "u", "l", "d", "c", "p", "m", "é", "v", "q",
    "f", "g", "b", "h", "x", "à", "j", "è", "y", "ê", "z", "ô", "k", "ç", "û", "ù", "î", "â", "w",
    "ï", "ë", "ü",
];

const LABELS_VOXPOPULI_DE: &[&str] = &[
    "-", "|", "e", "n", "i", "r", "s", "t", "a", "d", "h", "u", "l", "g", "c", "m", "o", "b", "w",
    "f", "k", "z", "v", "ü", "p", "ä", "ö", "j", "y", "x", "q", "ß",
];

const LABELS_VOXPOPULI_ES: &[&str] = &[
    "-", "|", "e", "a", "o", "s", "n", "r", "i", "l", "d", "c", "t", "u", "p", "m", "b", "q", "y",
    "g", "v", "h", "ó", "f", "í", "á", "j", "z", "é", "ñ", "x", "ú", "k", "w", "ü",
];

const LABELS_VOXPOPULI_IT: &[&str] = &[
    "-", "|", "e", "i", "a", "o", "n", "t", "r", "l", "s", "c", "d", "u", "p", "m", "g", "v", "h",
    "z", "f", "b", "q", "à", "è", "ù", "é", "ò", "ì", "k", "y", "x", "w", "j",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_roundtrips_every_bundle() {
        for bundle in PipelineBundle::all() {
            let parsed = PipelineBundle::from_name(bundle.bundle_name()).unwrap();
            assert_eq!(parsed, *bundle);
        }
    }

    #[test]
    fn from_name_rejects_unknown() {
        let err = PipelineBundle::from_name("WAV2VEC2_ASR_LARGE_LV60K").unwrap_err();
        assert!(matches!(err, Error::UnknownBundle(name) if name == "WAV2VEC2_ASR_LARGE_LV60K"));
    }

    #[test]
    fn labels_start_with_blank_and_delimiter() {
        for bundle in PipelineBundle::all() {
            let labels = bundle.labels();
            assert_eq!(labels[0], "-", "{} blank", bundle.bundle_name());
            assert_eq!(labels[1], "|", "{} delimiter", bundle.bundle_name());
        }
    }

    #[test]
    fn labels_are_distinct() {
        for bundle in PipelineBundle::all() {
            let labels = bundle.labels();
            let unique: std::collections::HashSet<_> = labels.iter().collect();
            assert_eq!(unique.len(), labels.len(), "{}", bundle.bundle_name());
        }
    }

    #[test]
    fn weights_urls_are_absolute() {
        for bundle in PipelineBundle::all() {
            assert!(bundle.weights_url().starts_with("https://"));
        }
    }

    #[test]
    fn serde_uses_bundle_names() {
        let json = serde_json::to_string(&PipelineBundle::Wav2Vec2AsrBase960h).unwrap();
        assert_eq!(json, "\"WAV2VEC2_ASR_BASE_960H\"");
    }
}
