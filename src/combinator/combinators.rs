use super::{Cursor, Parser};

/// Parsers that run one after another, each on the previous remainder.
pub trait Sequence<'a> {
    type Output;

    /// Returns `None` as soon as one member fails.
    fn attempt_each(&self, input: Cursor<'a>) -> Option<(Self::Output, Cursor<'a>)>;
}

/// Parsers tried in order against the same input.
pub trait Alternatives<'a> {
    type Output;

    fn attempt_first(&self, input: Cursor<'a>) -> Option<(Self::Output, Cursor<'a>)>;
}

macro_rules! sequence_tuple {
    ($($idx:tt $parser:ident $value:ident),+) => {
        impl<'a, $($parser),+> Sequence<'a> for ($($parser,)+)
        where
            $($parser: Parser<'a>,)+
        {
            type Output = ($(<$parser as Parser<'a>>::Output,)+);

            fn attempt_each(&self, input: Cursor<'a>) -> Option<(Self::Output, Cursor<'a>)> {
                let rest = input;
                $(
                    let ($value, rest) = match self.$idx.attempt(rest) {
                        (Some(value), rest) => (value, rest),
                        (None, _) => return None,
                    };
                )+
                Some((($($value,)+), rest))
            }
        }
    };
}

sequence_tuple!(0 A a);
sequence_tuple!(0 A a, 1 B b);
sequence_tuple!(0 A a, 1 B b, 2 C c);
sequence_tuple!(0 A a, 1 B b, 2 C c, 3 D d);
sequence_tuple!(0 A a, 1 B b, 2 C c, 3 D d, 4 E e);
sequence_tuple!(0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f);

impl<'a, P> Sequence<'a> for Vec<P>
where
    P: Parser<'a>,
{
    type Output = Vec<P::Output>;

    fn attempt_each(&self, input: Cursor<'a>) -> Option<(Self::Output, Cursor<'a>)> {
        let mut values = Vec::with_capacity(self.len());
        let mut rest = input;
        for parser in self {
            let (value, next) = parser.attempt(rest);
            values.push(value?);
            rest = next;
        }
        Some((values, rest))
    }
}

macro_rules! alternatives_tuple {
    ($($idx:tt $parser:ident),+) => {
        impl<'a, T, $($parser),+> Alternatives<'a> for ($($parser,)+)
        where
            $($parser: Parser<'a, Output = T>,)+
        {
            type Output = T;

            fn attempt_first(&self, input: Cursor<'a>) -> Option<(T, Cursor<'a>)> {
                $(
                    if let (Some(value), rest) = self.$idx.attempt(input) {
                        return Some((value, rest));
                    }
                )+
                None
            }
        }
    };
}

alternatives_tuple!(0 A);
alternatives_tuple!(0 A, 1 B);
alternatives_tuple!(0 A, 1 B, 2 C);
alternatives_tuple!(0 A, 1 B, 2 C, 3 D);
alternatives_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
alternatives_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

impl<'a, P> Alternatives<'a> for Vec<P>
where
    P: Parser<'a>,
{
    type Output = P::Output;

    fn attempt_first(&self, input: Cursor<'a>) -> Option<(Self::Output, Cursor<'a>)> {
        self.iter().find_map(|parser| match parser.attempt(input) {
            (Some(value), rest) => Some((value, rest)),
            (None, _) => None,
        })
    }
}

/// Sequence: every parser must match, in order. On failure the whole
/// sequence answers with its own entry cursor.
pub fn and<'a, S, F, U>(parsers: S, format: F) -> impl Parser<'a, Output = U>
where
    S: Sequence<'a>,
    F: Fn(S::Output) -> U,
{
    move |input: Cursor<'a>| match parsers.attempt_each(input) {
        Some((values, rest)) => (Some(format(values)), rest),
        None => (None, input),
    }
}

/// Ordered choice: the first alternative to match wins, even when a later
/// one would consume more.
pub fn or<'a, A, F, U>(alternatives: A, format: F) -> impl Parser<'a, Output = U>
where
    A: Alternatives<'a>,
    F: Fn(A::Output) -> U,
{
    move |input: Cursor<'a>| match alternatives.attempt_first(input) {
        Some((value, rest)) => (Some(format(value)), rest),
        None => (None, input),
    }
}

/// Zero or more repetitions. Never fails.
pub fn many<'a, P, F, U>(parser: P, format: F) -> impl Parser<'a, Output = U>
where
    P: Parser<'a>,
    F: Fn(Vec<P::Output>) -> U,
{
    move |input: Cursor<'a>| {
        let mut values = Vec::new();
        let mut rest = input;
        while let (Some(value), next) = parser.attempt(rest) {
            values.push(value);
            // a match that consumes nothing would repeat forever
            if next.offset() == rest.offset() {
                break;
            }
            rest = next;
        }
        (Some(format(values)), rest)
    }
}

/// Runs `parser`, then `convert`; a `None` from `convert` fails the parse
/// with the input untouched.
pub fn try_map<'a, P, F, U>(parser: P, convert: F) -> impl Parser<'a, Output = U>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> Option<U>,
{
    move |input: Cursor<'a>| match parser.attempt(input) {
        (Some(value), rest) => match convert(value) {
            Some(mapped) => (Some(mapped), rest),
            None => (None, input),
        },
        (None, _) => (None, input),
    }
}
