//! Text normalization — lexicon corrections plus whitespace cleanup.
//!
//! [`TextNormalizer::clean`] applies every lexicon entry as a literal
//! find-and-replace over the whole line, in declaration order, then
//! collapses whitespace runs to single spaces and trims the ends.
//!
//! Replacement order is deliberate and observable: a later entry may
//! re-match text an earlier entry inserted.  The built-in table is curated
//! so no corrected form contains another entry's key (checked by a lexicon
//! test), which makes `clean` idempotent — but the mechanism itself stays
//! simple sequential replacement, not a collision-proof rewrite engine.

use crate::lexicon::Lexicon;

// ---------------------------------------------------------------------------
// TextNormalizer
// ---------------------------------------------------------------------------

/// Applies lexicon corrections and whitespace normalization to one line.
///
/// # Example
/// ```rust
/// use lecture_notes::clean::TextNormalizer;
/// use lecture_notes::lexicon::Lexicon;
///
/// let normalizer = TextNormalizer::new(Lexicon::builtin());
/// assert_eq!(
///     normalizer.clean("今天讲 CSECSE   系统的 on deline 类型"),
///     "今天讲 CSE 系统的 unsigned 类型",
/// );
/// ```
pub struct TextNormalizer {
    lexicon: Lexicon,
}

impl TextNormalizer {
    /// Create a normalizer over an already-loaded lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Correct misheard terms and normalize whitespace.
    pub fn clean(&self, text: &str) -> String {
        let mut corrected = text.to_string();
        for (wrong, correct) in self.lexicon.entries() {
            if corrected.contains(wrong.as_str()) {
                corrected = corrected.replace(wrong.as_str(), correct);
            }
        }

        // Collapse whitespace runs and trim.
        let mut out = String::with_capacity(corrected.len());
        for word in corrected.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new(Lexicon::builtin())
    }

    #[test]
    fn applies_corrections() {
        let n = normalizer();
        assert_eq!(n.clean("编译用 GCG 工具链"), "编译用 GCC 工具链");
        assert_eq!(n.clean("fluwput 很高"), "throughput 很高");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        let n = normalizer();
        assert_eq!(n.clean("  网络   延迟\t很低  "), "网络 延迟 很低");
    }

    #[test]
    fn unknown_terms_pass_through() {
        let n = normalizer();
        assert_eq!(n.clean("Paxos 协议保证多数派一致"), "Paxos 协议保证多数派一致");
    }

    /// Pins the current declaration order: `CSECSE` is replaced before any
    /// shorter key could touch the inserted `CSE`, and `on deline` wins over
    /// a later `on line` match within the same text.
    #[test]
    fn declaration_order_is_pinned() {
        let n = normalizer();
        assert_eq!(
            n.clean("CSECSE 的 on deline 与 on line 都是整型"),
            // "都是" survives correction (the lexicon has no entry for it);
            // the classifier, not the normalizer, would reject this line.
            "CSE 的 unsigned 与 unsigned 都是整型",
        );
    }

    #[test]
    fn clean_is_idempotent() {
        let n = normalizer();
        for raw in [
            "今天讲 CSECSE 系统的 on deline 类型",
            "slogal 和 lillilenance 是两个指标",
            "没有任何可纠正词汇的一行",
            "短信四 g 模型与 consistency y 模型",
        ] {
            let once = n.clean(raw);
            assert_eq!(n.clean(&once), once, "not idempotent for {raw:?}");
        }
    }
}
