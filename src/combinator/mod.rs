//! A small parser-combinator engine over `&str`.
//!
//! A parser takes a [`Cursor`] and answers with a [`Reply`]: the matched value
//! (or `None`) paired with the remaining input. A parser that fails always
//! hands back the cursor it was given, so a failed branch never leaks partial
//! consumption into the next one.
//!
//! `many` is greedy and is never retried with fewer repetitions. Grammars
//! built on this engine must be unambiguous under that rule: whatever follows
//! a repetition cannot rely on the repetition giving input back.

pub mod combinators;
pub mod primitive;

pub use combinators::{and, many, or, try_map, Alternatives, Sequence};
pub use primitive::{match_any_of, match_char, match_end_of_input, match_predicate, Eof};

/// Immutable view over the unconsumed suffix of an input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// The text not consumed yet.
    pub fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// Byte offset of this cursor into the full text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// Splits off the next character, returning it with the advanced cursor.
    pub fn split_first(self) -> Option<(char, Cursor<'a>)> {
        let ch = self.rest().chars().next()?;
        Some((
            ch,
            Cursor {
                text: self.text,
                offset: self.offset + ch.len_utf8(),
            },
        ))
    }
}

/// Result of one parse attempt: the match (or `None`) and the remaining input.
pub type Reply<'a, T> = (Option<T>, Cursor<'a>);

pub trait Parser<'a> {
    type Output;

    fn attempt(&self, input: Cursor<'a>) -> Reply<'a, Self::Output>;

    /// Runs the parser from the start of `text`.
    fn run(&self, text: &'a str) -> Reply<'a, Self::Output> {
        self.attempt(Cursor::new(text))
    }
}

impl<'a, T, F> Parser<'a> for F
where
    F: Fn(Cursor<'a>) -> Reply<'a, T>,
{
    type Output = T;

    fn attempt(&self, input: Cursor<'a>) -> Reply<'a, T> {
        self(input)
    }
}
