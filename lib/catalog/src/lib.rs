//! # citrusmatch-catalog
//!
//! Catalog preparation for the citrusmatch engine: turning a raw tabular
//! source into an immutable, scorable snapshot.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  RawTable   │────>│  normalize  │────>│    build     │
//! │ (any names) │     │ (aliasing)  │     │ (coerce/clip)│
//! └─────────────┘     └─────────────┘     └──────────────┘
//!                                                │
//!                                         ┌──────┴───────┐
//!                                         │ PreparedCatalog
//!                                         │  (+ TTL cache)
//!                                         └──────────────┘
//! ```
//!
//! [`prepare`] runs the whole pipeline; [`CatalogCache`] memoizes the
//! result per source identity so repeated requests skip the rebuild.
//!
//! ## Example
//!
//! ```rust
//! use citrusmatch_catalog::{prepare, sample_table};
//!
//! let catalog = prepare(&sample_table()).unwrap();
//! assert_eq!(catalog.len(), 3);
//! assert_eq!(catalog.items()[0].name, "Mikan");
//! ```

pub mod build;
pub mod cache;
pub mod fixture;
pub mod normalize;
pub mod table;

// Re-export main types for convenience
pub use build::{build, prepare, PreparedCatalog};
pub use cache::{CacheKey, CatalogCache};
pub use fixture::sample_table;
pub use normalize::normalize;
pub use table::RawTable;
