//! Canonical formatting for FreeStyleWiki markup
//!
//!     This crate parses FreeStyleWiki ("fswiki") documents into a flat event
//!     stream and writes that stream back out in one canonical layout, the way
//!     a source-code formatter does for a programming language.
//!
//!     It is a pure lib: it powers fswiki-cli but supposes no shell
//!     environment, so nothing here prints, reads env vars or touches files
//!     other than through a reader the caller hands in.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── transforms.rs           # text → text entry points
//!     ├── formats
//!     │   ├── fswiki
//!     │   │   ├── block_state.rs  # cross-line state and transitions
//!     │   │   ├── inline.rs       # strong / emphasis spans
//!     │   │   ├── table.rs        # row splitting and column layout
//!     │   │   ├── parser.rs
//!     │   │   ├── serializer.rs
//!     │   │   └── mod.rs
//!     │   ├── json                # events-json inspection output
//!     │   └── treeviz             # events-treeviz inspection output
//!     ├── lib.rs
//!     └── ir                      # the event stream
//!
//! Testing
//!     tests
//!     └── <area>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs
//!     pulls each area in as a module.
//!
//! Core Algorithms
//!
//!     Parsing: each line is classified, most specific marker first, into the
//!     block state it wants (paragraph, list depth and kinds, preformatted,
//!     table). A pure transition between the previous and the next state
//!     yields the Open/Close events, always closes before opens, so the stream
//!     is balanced by construction. See formats/fswiki/block_state.rs.
//!
//!     Serializing: the stream is replayed once. Tables are buffered until
//!     they close, then padded column by column using display width, so CJK
//!     text lines up in a terminal.
//!
//!     The canonical form is a fixed point: formatting formatted text returns
//!     it unchanged.
//!
//! Errors
//!
//!     Markup never fails to parse. The remaining errors are a missing format,
//!     an unsupported operation, an invalid option and I/O while reading. See
//!     [`FormatError`].

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;

pub mod ir;

pub use error::FormatError;
pub use format::Format;
pub use formats::fswiki::formatting_rules::{FormattingRules, TableAlign};
pub use registry::FormatRegistry;
pub use transforms::{format_reader, format_source, format_source_with_rules};
