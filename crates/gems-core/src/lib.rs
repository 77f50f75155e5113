//! Filtering, faceting and localized projection for curated-gems datasets.
//!
//! The crate is organised leaves first: [`resolve`] turns a logical field into
//! text for a [`Language`], [`matcher`] tests a query against the resolved
//! fields, [`engine`] computes the visible items and facet counts, and
//! [`projection`] turns a visible item into an escaped [`DisplayRecord`].
//! [`Session`] is the one mutable slot an outer layer owns; everything below it
//! is pure.

pub mod engine;
mod error;
pub mod facets;
pub mod item;
pub mod language;
pub mod locale;
pub mod matcher;
pub mod projection;
pub mod resolve;
pub mod session;

pub use engine::{FilterState, FilteredView, recompute};
pub use error::LoadError;
pub use facets::{ALL_FACET, FacetCounts, FacetRow, SourceFilter, UNKNOWN_SOURCE};
pub use item::{Dataset, Item};
pub use language::Language;
pub use matcher::{Query, matches};
pub use projection::{DisplayRecord, escape_markup, project};
pub use resolve::{LogicalField, Resolved, candidate_keys, resolve, resolve_tags, resolve_text};
pub use session::{LoadTicket, Session, ViewStatus};
