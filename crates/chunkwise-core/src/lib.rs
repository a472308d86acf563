//! Core types and traits for chunkwise.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the layout value types exchanged between advisors and containers,
//! the error types for malformed layouts and tuning profiles, and the
//! [`ChunkSizing`] capability trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod traits;

pub use error::{ConfigError, LayoutError};
pub use layout::{ChunkLayout, ElementLayout};
pub use traits::ChunkSizing;
