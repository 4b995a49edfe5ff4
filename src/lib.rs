//! # seq-ext - Sequence Convenience Helpers
//!
//! Generic helpers layered on top of [`Iterator`]: emptiness checks,
//! bounded counting, duplicate detection, singleton extraction and
//! absence-safe containment.
//!
//! The counting predicates short-circuit, so they are safe on long or
//! infinite sequences where `count()` would never return:
//!
//! ```
//! use seq_ext::SequenceExt;
//!
//! // Consumes at most three elements.
//! assert!(std::iter::repeat(1).has_at_least(3));
//!
//! let words = ["fox", "dog", "fox"];
//! assert_eq!(words.iter().duplicates().collect::<Vec<_>>(), vec![&"fox"]);
//! ```
//!
//! ## Semantics
//!
//! - [`SequenceExt::only`] materializes its source once and answers "was
//!   this exactly one element?" with an `Option`.
//! - [`SequenceExt::except`] has set-difference semantics: it de-duplicates
//!   surviving values as well as removing the excluded one.
//! - All adaptors are lazy; nothing is consumed until the result is polled.

mod duplicates;
mod except;
mod ext;
mod singleton;


pub use duplicates::Duplicates;
pub use except::Except;
pub use ext::SequenceExt;
pub use singleton::{singleton, Singleton};
