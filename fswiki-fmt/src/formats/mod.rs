//! Format implementations
//!
//! `fswiki` is the only format that parses. The `events-*` formats serialize
//! the parsed stream for inspection.

pub mod fswiki;
pub mod icons;
pub mod json;
pub mod treeviz;

pub use fswiki::FswikiFormat;
pub use json::EventsJsonFormat;
pub use treeviz::EventsTreevizFormat;
