//! The brace-balance grammar.
//!
//! ```text
//! document := form*
//! form     := normal | block
//! block    := '{' form* '}'
//! normal   := any token that is neither '{' nor '}'
//! ```
//!
//! The stack of open braces lives in the parser state: `{` pushes, `}` pops.
//! A `}` with an empty stack is a committed error. A block whose closing
//! brace is missing commits with the opening brace that was left open.

use std::fmt;

use tracing::debug;
use trine_parse::{
    app2, error, get_state, pure, put_state, recursive, run, update_state, Itemizer, Outcome,
    Parser, Position,
};
use trine_stack::ensure_sufficient_stack;

use crate::error::BraceError;
use crate::state::OpenBraces;
use crate::token::{tokenize, Located};


pub type BraceParser<A> = Parser<OpenBraces, Located, BraceError, A>;

/// A node of the parsed document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Form {
    /// Any character other than a brace.
    Char(Located),
    Block(Block),
}

/// A balanced `{ ... }` and everything between.
///
/// Nesting depth is bounded only by the input, so `Clone`, `PartialEq` and
/// `Debug` grow the stack as they descend and `Drop` flattens the tree onto
/// a heap worklist.
pub struct Block {
    pub open: Located,
    pub forms: Vec<Form>,
    pub close: Located,
}

impl Block {
    pub fn new(open: Located, forms: Vec<Form>, close: Located) -> Self {
        Block { open, forms, close }
    }
}

impl Clone for Block {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Block::new(self.open, self.forms.clone(), self.close))
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.open == other.open
            && self.close == other.close
            && ensure_sufficient_stack(|| self.forms == other.forms)
    }
}

impl Eq for Block {}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Block")
                .field("open", &self.open)
                .field("forms", &self.forms)
                .field("close", &self.close)
                .finish()
        })
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.forms);
        while let Some(form) = pending.pop() {
            if let Form::Block(mut block) = form {
                pending.append(&mut block.forms);
            }
        }
    }
}

fn tokens() -> Itemizer<OpenBraces, Located, BraceError> {
    Itemizer::basic()
}

fn brace(ch: char) -> Located {
    Located::new(ch, Position::START)
}

/// `{`, pushed onto the open-brace stack.
pub fn open() -> BraceParser<Located> {
    tokens()
        .literal_by(brace('{'), Located::same_char)
        .bind(|token| {
            update_state(move |braces: &OpenBraces| braces.push(token)).seq2r(pure(token))
        })
}

/// `}`, popping the open-brace stack. Errors when nothing is open.
pub fn close() -> BraceParser<Located> {
    tokens()
        .literal_by(brace('}'), Located::same_char)
        .bind(|token| {
            get_state().bind(move |braces: OpenBraces| match braces.pop() {
                Some(outer) => put_state(outer).seq2r(pure(token)),
                None => error(BraceError::UnmatchedClose { brace: token }),
            })
        })
}

/// Any token that is not a brace.
pub fn normal() -> BraceParser<Located> {
    tokens().not1(open().plus(close()))
}

/// One character or one balanced block.
pub fn form() -> BraceParser<Form> {
    recursive(|form| {
        let block = open().bind(move |start| {
            app2(
                move |forms, end| Form::Block(Block::new(start, forms, end)),
                form.clone().many0(),
                close().commit(BraceError::UnmatchedOpen { brace: start }),
            )
        });
        normal().fmap(Form::Char).plus(block)
    })
}

/// A whole input. Consumes every token or reports the first unmatched brace.
///
/// Never fails: `many0` turns the first failing form into the end of the
/// sequence, so the outcome is always a success or an error.
pub fn document() -> BraceParser<Vec<Form>> {
    form().many0()
}

/// Parse `source` as a document.
pub fn check(source: &str) -> Result<Vec<Form>, BraceError> {
    let tokens = tokenize(source);
    debug!(chars = tokens.len(), "check");
    match run(&document(), tokens, OpenBraces::new()) {
        Outcome::Success(parsed) => Ok(parsed.result),
        Outcome::Error(error) => Err(error),
        // Unreachable through `document`.
        Outcome::Failure => Ok(Vec::new()),
    }
}

/// Counts over a parsed document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Non-brace characters.
    pub chars: usize,
    pub blocks: usize,
    pub max_depth: usize,
}

impl Summary {
    pub fn of(forms: &[Form]) -> Self {
        let mut summary = Summary::default();
        summary.visit(forms, 0);
        summary
    }

    fn visit(&mut self, forms: &[Form], depth: usize) {
        for form in forms {
            match form {
                Form::Char(_) => self.chars += 1,
                Form::Block(block) => {
                    self.blocks += 1;
                    self.max_depth = self.max_depth.max(depth + 1);
                    ensure_sufficient_stack(|| self.visit(&block.forms, depth + 1));
                }
            }
        }
    }
}
