//! Text sanitization for winnowing.
//!
//! The sanitizer reduces raw text to a canonical stream of lowercase,
//! punctuation-free characters. Every fingerprint position downstream is an
//! offset into this stream, so the rule set here is part of the fingerprint
//! contract: changing it changes every stored fingerprint.
//!
//! # Rule set
//!
//! A character is dropped when it is:
//! - Unicode whitespace (including newlines) other than NEL `U+0085`, or the
//!   BOM `U+FEFF`
//! - ASCII punctuation: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
//! - the Arabic comma `،` (`U+060C`) or Arabic question mark `؟` (`U+061F`)
//!
//! Everything else is kept in its original order and then lowercased with
//! simple Unicode lowercasing. No locale-aware folding and no Unicode
//! normalization is applied.
//!
//! # Examples
//!
//! ```rust
//! use canonical::sanitize;
//!
//! assert_eq!(sanitize("Hello, World!\n"), "helloworld");
//! assert_eq!(sanitize("مرحبا، كيف؟"), "مرحباكيف");
//! ```

/// Arabic comma.
pub const ARABIC_COMMA: char = '\u{060C}';

/// Arabic question mark.
pub const ARABIC_QUESTION_MARK: char = '\u{061F}';

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Next line. Unicode whitespace, but not stripped.
const NEXT_LINE: char = '\u{0085}';

/// Returns `true` if the sanitizer removes `c`.
#[inline]
pub fn is_stripped(c: char) -> bool {
    (c.is_whitespace() && c != NEXT_LINE)
        || c.is_ascii_punctuation()
        || matches!(c, ARABIC_COMMA | ARABIC_QUESTION_MARK | BYTE_ORDER_MARK)
}

/// Normalize raw text into the canonical winnowing stream.
///
/// Stripping happens before lowercasing, so characters whose lowercase form
/// would fall in the stripped set are still kept.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().filter(|&c| !is_stripped(c)) {
        if c.is_ascii() {
            out.push(c.to_ascii_lowercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    tracing::trace!(input_len = text.len(), output_len = out.len(), "sanitize");
    out
}
