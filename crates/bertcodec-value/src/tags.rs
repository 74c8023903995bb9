//! The fixed atoms BERT uses as tag markers.

use bertcodec_term::{Atom, Term};

/// Head of every BERT tag tuple.
pub const BERT: Atom = Atom::from_static("bert");

pub const NIL: Atom = Atom::from_static("nil");
pub const TRUE: Atom = Atom::from_static("true");
pub const FALSE: Atom = Atom::from_static("false");
pub const DICT: Atom = Atom::from_static("dict");
pub const REGEX: Atom = Atom::from_static("regex");
pub const TIME: Atom = Atom::from_static("time");

/// Build `{bert, Kind, Payload...}`.
pub(crate) fn tagged(kind: Atom, payload: impl IntoIterator<Item = Term>) -> Term {
    let mut elements = vec![Term::Atom(BERT), Term::Atom(kind)];
    elements.extend(payload);
    Term::Tuple(elements)
}

/// True if `elements` are those of a tuple that claims to be a BERT tag.
pub(crate) fn is_tag_tuple(elements: &[Term]) -> bool {
    elements.len() >= 2 && elements[0].is_atom(&BERT)
}
