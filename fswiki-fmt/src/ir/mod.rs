//! Intermediate Representation (IR) for fswiki documents.
//!
//! A document is represented as a flat node stream of [`events::Event`]
//! values rather than a tree. The parser produces it, the serializers consume
//! it, and nothing in between needs parent/child references.

pub mod events;
