//! docprint canonical text layer.
//!
//! Two small, pure building blocks that the fingerprinting strategies sit on:
//!
//! - [`sanitize`]: reduces raw text to the lowercase, whitespace- and
//!   punctuation-free stream that winnowing positions refer to.
//! - [`digest_hex`]: whole-document MD5 / SHA-1 / SHA-256 digests rendered as
//!   lowercase hex.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same input, same output on
//! any machine.
//!
//! ```rust
//! use canonical::{digest_hex, sanitize, DigestAlgorithm};
//!
//! let clean = sanitize("Hello, World!");
//! assert_eq!(clean, "helloworld");
//!
//! let md5 = digest_hex(DigestAlgorithm::Md5, b"hello");
//! assert_eq!(md5, "5d41402abc4b2a76b9719d911017c592");
//! ```

mod error;
mod hash;
mod sanitize;

pub use crate::error::CanonicalError;
pub use crate::hash::{digest_hex, DigestAlgorithm};
pub use crate::sanitize::{is_stripped, sanitize, ARABIC_COMMA, ARABIC_QUESTION_MARK};
