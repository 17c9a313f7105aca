//! Registry, index builder, and filter engine for the Glint palette.
//!
//! The data flow is linear: a [`Registry`] of component descriptors is
//! concatenated with the fixed docs list into a memoized [`SearchIndex`],
//! and [`filter`] selects the entries matching a query.

mod docs;
mod filter;
mod index;
mod registry;

pub use docs::doc_entries;
pub use filter::{filter, DEFAULT_MAX_RESULTS};
pub use index::SearchIndex;
pub use registry::{ComponentDescriptor, Registry, RegistryBuilder};
