//! FreeStyleWiki formatting tests
//!
//! Source text in, canonical text out. Fixtures live in ./fixtures and are
//! loaded with include_str!.

mod comments;
mod export;
mod idempotence;
mod lists;
mod plugins;
mod tables;
