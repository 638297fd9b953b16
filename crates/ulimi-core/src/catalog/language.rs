//! Language → alignment-model tables.
//!
//! Two immutable tables, checked in fixed priority: pipeline bundles
//! first, hub repositories second. A language code appears in at most
//! one table; the test below asserts it.

use crate::catalog::PipelineBundle;
use crate::error::{Error, Result};

/// Where the alignment model for a language comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignModelSource {
    /// Packaged pipeline bundle: weights plus a fixed label vocabulary.
    Pipeline(PipelineBundle),
    /// HuggingFace repository holding a CTC model and its processor.
    HubRepo(&'static str),
}

const PIPELINE_ALIGN_MODELS: &[(&str, PipelineBundle)] = &[
    ("en", PipelineBundle::Wav2Vec2AsrBase960h),
    ("fr", PipelineBundle::VoxPopuliAsrBase10kFr),
    ("de", PipelineBundle::VoxPopuliAsrBase10kDe),
    ("es", PipelineBundle::VoxPopuliAsrBase10kEs),
    ("it", PipelineBundle::VoxPopuliAsrBase10kIt),
];

const HUB_ALIGN_MODELS: &[(&str, &str)] = &[
    ("ja", "jonatasgrosman/wav2vec2-large-xlsr-53-japanese"),
    ("zh", "jonatasgrosman/wav2vec2-large-xlsr-53-chinese-zh-cn"),
    ("nl", "jonatasgrosman/wav2vec2-large-xlsr-53-dutch"),
    ("uk", "Yehor/wav2vec2-xls-r-300m-uk-with-small-lm"),
    ("pt", "jonatasgrosman/wav2vec2-large-xlsr-53-portuguese"),
    ("ar", "jonatasgrosman/wav2vec2-large-xlsr-53-arabic"),
    ("cs", "comodoro/wav2vec2-xls-r-300m-cs-250"),
    ("ru", "jonatasgrosman/wav2vec2-large-xlsr-53-russian"),
    ("pl", "jonatasgrosman/wav2vec2-large-xlsr-53-polish"),
    ("hu", "jonatasgrosman/wav2vec2-large-xlsr-53-hungarian"),
    ("fi", "jonatasgrosman/wav2vec2-large-xlsr-53-finnish"),
    ("fa", "jonatasgrosman/wav2vec2-large-xlsr-53-persian"),
    ("el", "jonatasgrosman/wav2vec2-large-xlsr-53-greek"),
    ("tr", "mpoyraz/wav2vec2-xls-r-300m-cv7-turkish"),
    ("da", "saattrupdan/wav2vec2-xls-r-300m-ftspeech"),
    ("he", "imvladikon/wav2vec2-xls-r-300m-hebrew"),
    ("vi", "nguyenvulebinh/wav2vec2-base-vi"),
    ("ko", "kresnik/wav2vec2-large-xlsr-korean"),
    ("ur", "kingabzpro/wav2vec2-large-xls-r-300m-Urdu"),
    ("te", "anuragshas/wav2vec2-large-xlsr-53-telugu"),
    ("hi", "theainerd/Wav2Vec2-large-xlsr-hindi"),
    ("ca", "softcatala/wav2vec2-large-xlsr-catala"),
    ("ml", "gvs/wav2vec2-large-xlsr-malayalam"),
    ("no", "NbAiLab/nb-wav2vec2-1b-bokmaal-v2"),
    ("nn", "NbAiLab/nb-wav2vec2-1b-nynorsk"),
    ("sk", "comodoro/wav2vec2-xls-r-300m-sk-cv8"),
    ("sl", "anton-l/wav2vec2-large-xlsr-53-slovenian"),
    ("hr", "classla/wav2vec2-xls-r-parlaspeech-hr"),
    ("ro", "gigant/romanian-wav2vec2"),
    ("eu", "stefan-it/wav2vec2-large-xlsr-53-basque"),
    ("gl", "ifrz/wav2vec2-large-xlsr-galician"),
    ("ka", "xsway/wav2vec2-large-xlsr-georgian"),
    ("lv", "jimregan/wav2vec2-large-xlsr-latvian-cv"),
    ("tl", "Khalsuu/filipino-wav2vec2-l-xls-r-300m-official"),
];

/// Resolve a language code to its model source.
///
/// Pure table lookup; no network. Codes are matched exactly, so empty
/// or malformed input falls through to [`Error::UnsupportedLanguage`]
/// like any other miss.
pub fn resolve_align_source(language: &str) -> Result<AlignModelSource> {
    if let Some((_, bundle)) = PIPELINE_ALIGN_MODELS
        .iter()
        .find(|(code, _)| *code == language)
    {
        return Ok(AlignModelSource::Pipeline(*bundle));
    }

    if let Some((_, repo)) = HUB_ALIGN_MODELS.iter().find(|(code, _)| *code == language) {
        return Ok(AlignModelSource::HubRepo(*repo));
    }

    Err(Error::UnsupportedLanguage(language.to_string()))
}

/// Languages served by pipeline bundles.
pub fn pipeline_align_models() -> &'static [(&'static str, PipelineBundle)] {
    PIPELINE_ALIGN_MODELS
}

/// Languages served by hub repositories.
pub fn hub_align_models() -> &'static [(&'static str, &'static str)] {
    HUB_ALIGN_MODELS
}

/// All supported language codes with their sources, pipeline table first.
pub fn supported_languages() -> impl Iterator<Item = (&'static str, AlignModelSource)> {
    PIPELINE_ALIGN_MODELS
        .iter()
        .map(|(code, bundle)| (*code, AlignModelSource::Pipeline(*bundle)))
        .chain(
            HUB_ALIGN_MODELS
                .iter()
                .map(|(code, repo)| (*code, AlignModelSource::HubRepo(*repo))),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_codes_resolve_to_pipeline() {
        for (code, bundle) in PIPELINE_ALIGN_MODELS {
            let source = resolve_align_source(code).unwrap();
            assert_eq!(source, AlignModelSource::Pipeline(*bundle), "{code}");
        }
    }

    #[test]
    fn hub_codes_resolve_to_hub() {
        for (code, repo) in HUB_ALIGN_MODELS {
            let source = resolve_align_source(code).unwrap();
            assert_eq!(source, AlignModelSource::HubRepo(*repo), "{code}");
        }
    }

    #[test]
    fn unknown_code_is_unsupported() {
        let err = resolve_align_source("xx").unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(code) if code == "xx"));
    }

    #[test]
    fn empty_and_malformed_codes_are_unsupported() {
        for code in ["", " ", "42", "EN", "en-US"] {
            assert!(
                matches!(
                    resolve_align_source(code),
                    Err(Error::UnsupportedLanguage(_))
                ),
                "{code:?}"
            );
        }
    }

    #[test]
    fn tables_are_mutually_exclusive() {
        for (code, _) in PIPELINE_ALIGN_MODELS {
            assert!(
                !HUB_ALIGN_MODELS.iter().any(|(hub_code, _)| hub_code == code),
                "{code} present in both tables"
            );
        }
    }

    #[test]
    fn tables_have_no_duplicate_codes() {
        let mut seen = std::collections::HashSet::new();
        for (code, _) in supported_languages() {
            assert!(seen.insert(code), "duplicate table entry for {code}");
        }
    }

    #[test]
    fn supported_languages_covers_both_tables() {
        let count = supported_languages().count();
        assert_eq!(count, PIPELINE_ALIGN_MODELS.len() + HUB_ALIGN_MODELS.len());
    }
}
