//! `versefind` - scripture corpus compiler and verse reference lookup.
//!
//! Compiles loosely formatted verse dumps into a book -> chapter -> verse
//! document and answers queries like `genesis 1:2`, `1 samuel 1:1-5` or
//! `genesis 1:30 - 2:2` against it.

pub mod bible;
pub mod config;
pub mod constants;
pub mod corpus_files;
pub mod error;
pub mod services;
