use super::{
    classify::LineClass,
    kinds::Paragraph,
    open::BlockOpen,
    types::Block,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Quote { lines: Vec<String> },
    List { kind: ListKind, items: Vec<String> },
    Fence { tag: Option<String>, lines: Vec<String> },
}

/// Line-driven state machine that groups classified lines into [`Block`]s.
///
/// Accumulation is greedy and never looks ahead: each line either extends the
/// open block, or flushes it and opens the next one.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush();
            return;
        }

        if self.try_extend(c) {
            return;
        }

        self.flush();
        match &c.open {
            Some(open) => self.open_leaf(open.clone()),
            None => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![c.raw.to_string()],
                }
            }
        }
    }

    /// Appends the line to the open block when it continues it.
    fn try_extend(&mut self, c: &LineClass<'_>) -> bool {
        match (&mut self.leaf, &c.open) {
            (LeafState::Quote { lines }, Some(BlockOpen::Quote { text })) => {
                lines.push(text.clone());
            }
            (
                LeafState::List {
                    kind: ListKind::Unordered,
                    items,
                },
                Some(BlockOpen::Bullet { text }),
            )
            | (
                LeafState::List {
                    kind: ListKind::Ordered,
                    items,
                },
                Some(BlockOpen::Ordered { text }),
            ) => {
                items.push(text.clone());
            }
            (LeafState::List { items, .. }, None) if c.is_indented => {
                if let Some(last) = items.last_mut() {
                    last.push('\n');
                    last.push_str(c.raw.trim());
                }
            }
            (LeafState::Paragraph { lines }, None) => {
                lines.push(c.raw.to_string());
            }
            _ => return false,
        }
        true
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush; an unterminated fence keeps everything up to here.
        self.flush();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen) {
        self.leaf = match open {
            BlockOpen::Fence { tag } => LeafState::Fence { tag, lines: vec![] },
            BlockOpen::Heading { level, text } => {
                self.out.push(Block::Heading { level, text });
                LeafState::None
            }
            BlockOpen::Quote { text } => LeafState::Quote { lines: vec![text] },
            BlockOpen::Bullet { text } => LeafState::List {
                kind: ListKind::Unordered,
                items: vec![text],
            },
            BlockOpen::Ordered { text } => LeafState::List {
                kind: ListKind::Ordered,
                items: vec![text],
            },
        };
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        if c.closes_fence {
            self.flush();
            return;
        }
        if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.raw.to_string());
        }
    }

    fn flush(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        let block = match prev {
            LeafState::None => return,
            LeafState::Paragraph { lines } => Block::Paragraph {
                text: lines.join(Paragraph::LINE_JOIN),
            },
            LeafState::Quote { lines } => Block::Blockquote {
                text: lines.join("\n"),
            },
            LeafState::List {
                kind: ListKind::Unordered,
                items,
            } => Block::UnorderedList { items },
            LeafState::List {
                kind: ListKind::Ordered,
                items,
            } => Block::OrderedList { items },
            LeafState::Fence { tag, lines } => Block::FencedBlock {
                body: lines.join("\n"),
                tag,
            },
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
