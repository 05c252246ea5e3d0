//! PresiDATA canonical text layer.
//!
//! Every string the search core compares (record names, party labels, ids,
//! user queries) passes through [`normalize`] first. Two strings are
//! considered the same text exactly when their canonical forms are equal.
//!
//! ## What we do
//!
//! - Unicode canonical decomposition (NFD)
//! - Diacritic folding (combining marks U+0300..=U+036F are dropped)
//! - Lowercasing
//! - Everything outside `[a-z0-9]` becomes a delimiter
//! - Whitespace collapsing and trimming
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. The same input produces the
//! same canonical text on every machine, and `normalize` is idempotent:
//! `normalize(&normalize(x)) == normalize(x)`.
//!
//! ```rust
//! use canonical::{normalize, tokenize};
//!
//! let text = normalize("  Getúlio   VARGAS ");
//! assert_eq!(text, "getulio vargas");
//! assert_eq!(tokenize(&text), vec!["getulio", "vargas"]);
//! ```

mod fold;
mod pipeline;
mod token;
mod whitespace;

pub use crate::fold::{fold_diacritics, is_combining_diacritic};
pub use crate::pipeline::{normalize, normalize_opt};
pub use crate::token::tokenize;
pub use crate::whitespace::collapse_whitespace;
