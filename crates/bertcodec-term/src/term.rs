use std::fmt;

use bytes::Bytes;

use crate::atom::Atom;

/// A primitive external-format term.
///
/// This is the closed set of shapes the BERT layer lowers values into. Lists
/// and tuples are never conflated, and binaries are never read as lists of
/// bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Atom(Atom),
    Tuple(Vec<Term>),
    List(Vec<Term>),
    Binary(Bytes),
    Integer(i64),
    Float(f64),
}

impl Term {
    /// Build a tuple term.
    pub fn tuple(elements: impl Into<Vec<Term>>) -> Self {
        Term::Tuple(elements.into())
    }

    /// Build a list term.
    pub fn list(elements: impl Into<Vec<Term>>) -> Self {
        Term::List(elements.into())
    }

    /// Build a binary term.
    pub fn binary(data: impl Into<Bytes>) -> Self {
        Term::Binary(data.into())
    }

    /// The empty list.
    pub fn nil() -> Self {
        Term::List(Vec::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Term::Atom(_) => "atom",
            Term::Tuple(_) => "tuple",
            Term::List(_) => "list",
            Term::Binary(_) => "binary",
            Term::Integer(_) => "integer",
            Term::Float(_) => "float",
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Term::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Term::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&Bytes> {
        match self {
            Term::Binary(data) => Some(data),
            _ => None,
        }
    }

    /// True if this term is the given atom.
    pub fn is_atom(&self, atom: &Atom) -> bool {
        matches!(self, Term::Atom(a) if a == atom)
    }
}

impl From<Atom> for Term {
    fn from(atom: Atom) -> Self {
        Term::Atom(atom)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Integer(value)
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Float(value)
    }
}

impl From<Bytes> for Term {
    fn from(data: Bytes) -> Self {
        Term::Binary(data)
    }
}

/// Erlang-style rendering, used in error messages and logs.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(atom) => write!(f, "{atom}"),
            Term::Integer(value) => write!(f, "{value}"),
            Term::Float(value) => write!(f, "{value:?}"),
            Term::Tuple(elements) => write_seq(f, "{", elements, "}"),
            Term::List(elements) => write_seq(f, "[", elements, "]"),
            Term::Binary(data) => {
                write!(f, "<<")?;
                for (i, byte) in data.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{byte}")?;
                }
                write!(f, ">>")
            }
        }
    }
}

fn write_seq(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    elements: &[Term],
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{element}")?;
    }
    f.write_str(close)
}
