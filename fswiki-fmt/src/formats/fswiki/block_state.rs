//! Cross-line block state and the transition between two states.
//!
//!     The parser classifies every line into the block state it wants to be in
//!     next. [`transition`] compares that with the previous state and returns the
//!     Open/Close events that move the stream from one nested configuration to
//!     the other. It is a pure function of the two snapshots; the parser owns
//!     no other flags.
//!
//!     Closes are always emitted before opens so the stream stays properly
//!     nested, in this order:
//!
//!         paragraph close → list closes (innermost first) → table close
//!         → list opens (outermost first) → paragraph open
//!         → preformatted start → table open

use crate::ir::events::{Event, ListKind};

/// Deepest list nesting the markup can express (`***` / `+++`).
pub const MAX_LIST_DEPTH: usize = 3;

/// Open list levels, each remembering the kind it was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListState {
    depth: usize,
    kinds: [ListKind; MAX_LIST_DEPTH],
}

impl ListState {
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Kind remembered at a 1-based `depth`, if that level is open.
    pub fn kind_at(&self, depth: usize) -> Option<ListKind> {
        if depth == 0 || depth > self.depth {
            return None;
        }
        Some(self.kinds[depth - 1])
    }

    /// State after a list item line of `kind` at `depth`.
    ///
    /// Shallower open levels keep their kinds; the item's own level and any
    /// newly opened levels take `kind`.
    pub fn item(self, depth: usize, kind: ListKind) -> Self {
        let depth = depth.clamp(1, MAX_LIST_DEPTH);
        let mut kinds = self.kinds;
        for (level, slot) in kinds.iter_mut().enumerate() {
            if level >= depth {
                *slot = ListKind::default();
            } else if level >= self.depth.min(depth - 1) {
                *slot = kind;
            }
        }
        Self { depth, kinds }
    }

    /// Number of outer levels both states agree on.
    fn shared_levels(&self, other: &Self) -> usize {
        (0..self.depth.min(other.depth))
            .take_while(|&level| self.kinds[level] == other.kinds[level])
            .count()
    }
}

/// Snapshot of which block constructs are open after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockState {
    pub paragraph: bool,
    pub list: ListState,
    pub preformatted: bool,
    pub table: bool,
}

impl BlockState {
    pub fn paragraph() -> Self {
        Self {
            paragraph: true,
            ..Self::default()
        }
    }

    pub fn preformatted() -> Self {
        Self {
            preformatted: true,
            ..Self::default()
        }
    }

    pub fn table() -> Self {
        Self {
            table: true,
            ..Self::default()
        }
    }

    pub fn list(list: ListState) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }

    /// State a comment line leaves behind: lists and tables survive it,
    /// paragraphs and preformatted blocks do not.
    pub fn across_comment(&self) -> Self {
        Self {
            list: self.list,
            table: self.table,
            ..Self::default()
        }
    }
}

/// Events needed to move from `prev` to `next`.
pub fn transition(prev: &BlockState, next: &BlockState) -> Vec<Event> {
    let mut events = Vec::new();

    if prev.paragraph && !next.paragraph {
        events.push(Event::ParagraphClose);
    }

    let shared = prev.list.shared_levels(&next.list);
    for level in (shared..prev.list.depth).rev() {
        events.push(prev.list.kinds[level].close_event());
    }

    if prev.table && !next.table {
        events.push(Event::TableClose);
    }

    for level in shared..next.list.depth {
        events.push(next.list.kinds[level].open_event());
    }

    if !prev.paragraph && next.paragraph {
        events.push(Event::ParagraphOpen);
    }

    if !prev.preformatted && next.preformatted {
        events.push(Event::Preformatted {
            content: String::new(),
        });
    }

    if !prev.table && next.table {
        events.push(Event::TableOpen);
    }

    events
}
