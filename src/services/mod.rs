//! Service modules.
//!
//! Long-lived abstractions built on top of the pure [`crate::bible`] pipeline.

pub mod scripture;
