//! Inspection formats over parsed fswiki documents

mod events;
