//! Language-specific boundary rules for split decisions.
//!
//! The splitter stays language-agnostic; a [`BoundaryRules`] implementation
//! supplies the sentence-final endings and clause-starting words for one
//! language.

/// Detects linguistic boundaries in a word stream.
pub trait BoundaryRules {
    /// Whether this word closes a sentence.
    ///
    /// Sentence-final punctuation is matched separately by the splitter's
    /// delimiter pattern; implementations only add language-specific endings.
    fn is_sentence_end(&self, word: &str) -> bool;

    /// Whether this word opens a new clause (conjunctions, discourse markers).
    fn is_clause_start(&self, word: &str) -> bool;
}

/// Korean boundary rules.
///
/// Sentence detection keys on common final verb endings, clause detection on
/// discourse conjunctions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Korean;

const KOREAN_SENTENCE_ENDINGS: &[&str] = &[
    "니다", "세요", "어요", "아요", "에요", "예요", "네요", "군요", "지요", "죠", "나요",
    "까요", "거든요", "잖아요", "는다", "았다", "었다", "겠다",
];

const KOREAN_CLAUSE_STARTS: &[&str] = &[
    "그리고", "그런데", "근데", "하지만", "그래서", "그러나", "그러면", "그럼", "그러니까",
    "왜냐하면", "그래도", "또한", "또",
];

impl BoundaryRules for Korean {
    fn is_sentence_end(&self, word: &str) -> bool {
        let stem = strip_punctuation(word);
        KOREAN_SENTENCE_ENDINGS.iter().any(|e| stem.ends_with(e))
    }

    fn is_clause_start(&self, word: &str) -> bool {
        let stem = strip_punctuation(word);
        KOREAN_CLAUSE_STARTS.iter().any(|c| stem.starts_with(c))
    }
}

/// English boundary rules.
///
/// English marks sentence ends with punctuation alone, so only clause
/// detection adds signal here.
#[derive(Clone, Copy, Debug, Default)]
pub struct English;

const ENGLISH_CLAUSE_STARTS: &[&str] = &[
    "and", "but", "so", "or", "because", "then", "however", "anyway", "well", "now", "also",
];

impl BoundaryRules for English {
    fn is_sentence_end(&self, _word: &str) -> bool {
        false
    }

    fn is_clause_start(&self, word: &str) -> bool {
        let stem = strip_punctuation(word).to_lowercase();
        ENGLISH_CLAUSE_STARTS.iter().any(|c| stem == *c)
    }
}

/// Strip surrounding punctuation, keeping letters and digits.
fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}
