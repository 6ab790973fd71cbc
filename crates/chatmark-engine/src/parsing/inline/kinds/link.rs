use std::collections::HashMap;

/// `[label](href)` link syntax.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';
}

/// Where a `[` closes, and where its href would end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkShape {
    /// Index of the matching `]`.
    pub close: usize,
    /// Index of the first `)` after `](`; `None` when `]` is not followed by
    /// `(` or no `)` follows.
    pub href_end: Option<usize>,
}

/// Link shapes for every matched `[` in a string, found in one left-to-right
/// pass. Brackets nest; an unmatched `[` has no shape.
#[derive(Debug, Default)]
pub struct LinkShapes {
    by_open: HashMap<usize, LinkShape>,
}

impl LinkShapes {
    pub fn scan(s: &str) -> Self {
        let bytes = s.as_bytes();
        let mut by_open = HashMap::new();
        let mut open_stack = vec![];
        // Opens whose `](` is seen and that still wait for a `)`.
        let mut awaiting_href_end: Vec<usize> = vec![];

        for (i, &b) in bytes.iter().enumerate() {
            match b {
                Link::LABEL_OPEN => open_stack.push(i),
                Link::LABEL_CLOSE => {
                    let Some(open) = open_stack.pop() else {
                        continue;
                    };
                    by_open.insert(
                        open,
                        LinkShape {
                            close: i,
                            href_end: None,
                        },
                    );
                    if bytes.get(i + 1) == Some(&Link::HREF_OPEN) {
                        awaiting_href_end.push(open);
                    }
                }
                Link::HREF_CLOSE => {
                    for open in awaiting_href_end.drain(..) {
                        if let Some(shape) = by_open.get_mut(&open) {
                            shape.href_end = Some(i);
                        }
                    }
                }
                _ => {}
            }
        }

        Self { by_open }
    }

    pub fn at(&self, open: usize) -> Option<LinkShape> {
        self.by_open.get(&open).copied()
    }
}
