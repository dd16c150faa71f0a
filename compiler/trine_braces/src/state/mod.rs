//! Parse state for brace matching: the stack of currently open braces.
//!
//! The stack is persistent. `push` and `pop` return new stacks sharing
//! their tail with the original, so the per-token state clone the parser
//! performs is a reference-count bump regardless of nesting depth.

use std::sync::Arc;

use crate::token::Located;


struct Frame {
    brace: Located,
    below: Option<Arc<Frame>>,
}

/// Open braces, innermost on top.
#[derive(Clone, Default)]
pub struct OpenBraces {
    top: Option<Arc<Frame>>,
    depth: usize,
}

impl OpenBraces {
    pub fn new() -> Self {
        OpenBraces::default()
    }

    /// The stack with `brace` opened on top.
    #[must_use]
    pub fn push(&self, brace: Located) -> Self {
        OpenBraces {
            top: Some(Arc::new(Frame {
                brace,
                below: self.top.clone(),
            })),
            depth: self.depth + 1,
        }
    }

    /// The stack with the innermost brace closed, or `None` if nothing is open.
    pub fn pop(&self) -> Option<Self> {
        let frame = self.top.as_ref()?;
        Some(OpenBraces {
            top: frame.below.clone(),
            depth: self.depth - 1,
        })
    }

    /// The innermost open brace.
    pub fn peek(&self) -> Option<Located> {
        self.top.as_ref().map(|frame| frame.brace)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// Open braces from innermost to outermost.
    pub fn iter(&self) -> impl Iterator<Item = Located> + '_ {
        std::iter::successors(self.top.as_deref(), |frame| frame.below.as_deref())
            .map(|frame| frame.brace)
    }
}

impl std::fmt::Debug for OpenBraces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for OpenBraces {
    fn eq(&self, other: &Self) -> bool {
        self.depth == other.depth && self.iter().eq(other.iter())
    }
}

impl Eq for OpenBraces {}

// Unlink frames one at a time; the default recursive drop of a long chain
// can overflow the stack.
impl Drop for OpenBraces {
    fn drop(&mut self) {
        let mut next = self.top.take();
        while let Some(frame) = next {
            match Arc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.below.take(),
                Err(_) => break,
            }
        }
    }
}
