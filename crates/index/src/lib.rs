//! # PresiDATA Index
//!
//! The catalog of officeholder records that search runs against. Each
//! [`Record`] is paired at load time with a [`SearchMeta`]: its canonical
//! name, token set, canonical party text and party tokens. Metadata is built
//! once in [`Catalog::new`] and never mutated, so a catalog can be shared
//! freely between readers.
//!
//! ## Example
//!
//! ```
//! use index::{Catalog, Party, Record};
//!
//! let catalog = Catalog::new(vec![
//!     Record::new("vargas-1", "Getúlio Vargas")
//!         .with_party(Party::Single("Aliança Liberal".into()))
//!         .with_mandate("03/11/1930", "29/10/1945"),
//! ]);
//!
//! let entry = catalog.get_by_id("vargas-1").unwrap();
//! assert_eq!(entry.meta().full_name, "getulio vargas");
//! assert_eq!(entry.meta().tokens, vec!["getulio", "vargas", "1"]);
//! assert_eq!(entry.meta().party_tokens, vec!["alianca", "liberal"]);
//! ```
//!
//! Malformed mandate dates never fail: [`parse_mandate_date`] maps them to
//! [`SENTINEL_DATE`].

mod catalog;
mod error;
mod mandate;
mod meta;
mod record;

pub use crate::catalog::{Catalog, CatalogEntry};
pub use crate::error::CatalogError;
pub use crate::mandate::{parse_mandate_date, SENTINEL_DATE};
pub use crate::meta::{build_meta, SearchMeta};
pub use crate::record::{Party, Record};
