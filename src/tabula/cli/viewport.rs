//! Viewport size as a capability the shell queries, never core state.

use console::Term;

pub trait Viewport {
    /// Usable width in terminal columns.
    fn width(&self) -> u16;
}

/// Reads the width of the attached terminal on every query, so resizes apply
/// to the next render.
pub struct TerminalViewport {
    term: Term,
}

impl TerminalViewport {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Viewport for TerminalViewport {
    fn width(&self) -> u16 {
        let (_rows, cols) = self.term.size();
        cols
    }
}

/// A viewport of known width, used when output is not a terminal.
pub struct FixedViewport(pub u16);

impl Viewport for FixedViewport {
    fn width(&self) -> u16 {
        self.0
    }
}

/// Column widths for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub compact: bool,
    pub id_width: usize,
    pub name_width: usize,
    pub date_width: usize,
    pub value_width: usize,
}

impl Layout {
    pub fn for_viewport(viewport: &dyn Viewport, compact_below: u16) -> Self {
        if viewport.width() < compact_below {
            Self {
                compact: true,
                id_width: 3,
                name_width: 14,
                date_width: 10,
                value_width: 8,
            }
        } else {
            Self {
                compact: false,
                id_width: 5,
                name_width: 28,
                date_width: 12,
                value_width: 12,
            }
        }
    }
}
