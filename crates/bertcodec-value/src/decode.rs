use std::collections::btree_map::Entry;

use bertcodec_term::{Atom, Term};
use bytes::Bytes;
use tracing::debug;

use crate::error::{BertError, Result};
use crate::regex::{decode_options, RegexValue};
use crate::tags::{is_tag_tuple, DICT, FALSE, NIL, REGEX, TIME, TRUE};
use crate::time::TimeComponents;
use crate::value::{BertMap, Value};

/// Rebuild a value from BERT-tagged terms.
///
/// A tuple headed by `bert` with at least two elements must be one of the
/// known tag shapes, selected by arity; anything else fails with
/// [`BertError::InvalidBertTag`] instead of passing through as a plain
/// tuple. All other tuples and lists are decoded element by element.
///
/// Binary map keys come back as [`Value::Text`]. Binaries anywhere else are
/// left as bytes. A dict whose keys collide after that conversion fails with
/// [`BertError::InvalidBertTag`].
pub fn decode(term: &Term) -> Result<Value> {
    match term {
        Term::Tuple(elements) if is_tag_tuple(elements) => decode_tagged(elements),
        Term::Tuple(elements) => Ok(Value::Tuple(decode_all(elements)?)),
        Term::Binary(data) => Ok(Value::Binary(data.clone())),
        Term::List(elements) => Ok(Value::List(decode_all(elements)?)),
        Term::Atom(atom) => Ok(Value::Atom(atom.clone())),
        Term::Integer(i) => Ok(Value::Integer(*i)),
        Term::Float(f) => Ok(Value::Float(*f)),
    }
}

fn decode_all(terms: &[Term]) -> Result<Vec<Value>> {
    terms.iter().map(decode).collect()
}

fn decode_tagged(elements: &[Term]) -> Result<Value> {
    match elements {
        [_, kind] if kind.is_atom(&NIL) => Ok(Value::Nil),
        [_, kind] if kind.is_atom(&TRUE) => Ok(Value::Bool(true)),
        [_, kind] if kind.is_atom(&FALSE) => Ok(Value::Bool(false)),
        [_, kind, items] if kind.is_atom(&DICT) => decode_dict(items),
        [_, kind, pattern, options] if kind.is_atom(&REGEX) => decode_regex(pattern, options),
        [_, kind, mega, sec, milli] if kind.is_atom(&TIME) => decode_time(mega, sec, milli),
        _ => {
            debug!(arity = elements.len(), kind = %elements[1], "unrecognized bert tag");
            Err(BertError::InvalidBertTag(format!(
                "{} with arity {}",
                elements[1],
                elements.len()
            )))
        }
    }
}

fn decode_dict(items: &Term) -> Result<Value> {
    let Term::List(items) = items else {
        return Err(malformed("dict items", items));
    };

    let mut map = BertMap::new();
    for item in items {
        let Term::Tuple(pair) = item else {
            return Err(malformed("dict entry", item));
        };
        let [key, value] = pair.as_slice() else {
            return Err(malformed("dict entry", item));
        };

        let key = match decode(key)? {
            Value::Binary(bytes) => Value::Text(utf8(&bytes, "dict key")?.to_owned()),
            other => other,
        };
        let value = decode(value)?;
        match map.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(slot) => {
                let key = slot.key();
                debug!(?key, "duplicate dict key");
                return Err(BertError::InvalidBertTag(format!("duplicate dict key {key:?}")));
            }
        }
    }
    Ok(Value::Map(map))
}

fn decode_regex(pattern: &Term, options: &Term) -> Result<Value> {
    let Term::Binary(source) = pattern else {
        return Err(malformed("regex source", pattern));
    };
    let Term::List(options) = options else {
        return Err(malformed("regex options", options));
    };

    let atoms = options
        .iter()
        .map(|option| option.as_atom().ok_or_else(|| malformed("regex option", option)))
        .collect::<Result<Vec<&Atom>>>()?;
    let flags = decode_options(atoms)?;

    Ok(Value::Regex(RegexValue::new(utf8(source, "regex source")?, flags)))
}

fn decode_time(mega: &Term, sec: &Term, milli: &Term) -> Result<Value> {
    let component = |term: &Term| {
        term.as_integer().ok_or_else(|| malformed("time component", term))
    };
    let parts = TimeComponents {
        megaseconds: component(mega)?,
        seconds: component(sec)?,
        milliseconds: component(milli)?,
    };
    parts
        .to_datetime()
        .map(Value::Time)
        .ok_or_else(|| BertError::InvalidBertTag(format!("time out of range: {parts:?}")))
}

/// Strict UTF-8 view of a binary. Borrows; never copies or alters the input.
fn utf8<'a>(bytes: &'a Bytes, context: &'static str) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|source| {
        debug!(context, %source, "invalid utf-8");
        BertError::InvalidUtf8 { context, source }
    })
}

fn malformed(what: &str, term: &Term) -> BertError {
    debug!(what, kind = term.kind(), "malformed bert payload");
    BertError::InvalidBertTag(format!("malformed {what}: {term}"))
}
