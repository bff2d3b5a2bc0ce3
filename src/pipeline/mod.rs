//! Classification, resolution and grouping stages.
//!
//! All three stages are pure: they take their inputs by value or reference
//! and return new values, diagnostics included.

pub mod classify;
pub mod group;
pub mod resolve;

pub use classify::{classify, Classified};
pub use group::{group, render_entry, Grouping, OutputBucket};
pub use resolve::{resolve, resolve_pin};
