use bertcodec_term::Term;
use bytes::Bytes;

use crate::error::Result;
use crate::regex::{encode_options, RegexValue};
use crate::tags::{tagged, DICT, FALSE, NIL, REGEX, TIME, TRUE};
use crate::time::TimeComponents;
use crate::value::{BertMap, Value};

/// Lower a value into BERT-tagged terms.
///
/// Nil, booleans, maps, regexes and times are wrapped in `{bert, ...}`
/// tuples wherever they occur. Tuples, lists and map entries are encoded
/// element by element. A tuple whose elements happen to spell a tag is not
/// special here; it is written element by element like any other tuple.
///
/// Fails only for regexes whose flags have no BERT option.
pub fn encode(value: &Value) -> Result<Term> {
    let term = match value {
        Value::Nil => tagged(NIL, []),
        Value::Bool(true) => tagged(TRUE, []),
        Value::Bool(false) => tagged(FALSE, []),
        Value::Tuple(elements) => Term::Tuple(encode_all(elements)?),
        Value::Binary(data) => Term::Binary(data.clone()),
        Value::Text(text) => Term::Binary(Bytes::copy_from_slice(text.as_bytes())),
        Value::List(elements) => Term::List(encode_all(elements)?),
        Value::Map(entries) => encode_map(entries)?,
        Value::Time(instant) => {
            let parts = TimeComponents::from_datetime(instant);
            tagged(
                TIME,
                [
                    Term::Integer(parts.megaseconds),
                    Term::Integer(parts.seconds),
                    Term::Integer(parts.milliseconds),
                ],
            )
        }
        Value::Regex(regex) => encode_regex(regex)?,
        Value::Atom(atom) => Term::Atom(atom.clone()),
        Value::Integer(i) => Term::Integer(*i),
        Value::Float(f) => Term::Float(*f),
    };
    Ok(term)
}

fn encode_all(values: &[Value]) -> Result<Vec<Term>> {
    values.iter().map(encode).collect()
}

fn encode_map(entries: &BertMap) -> Result<Term> {
    let items = entries
        .iter()
        .map(|(key, value)| Ok(Term::tuple(vec![encode(key)?, encode(value)?])))
        .collect::<Result<Vec<_>>>()?;
    Ok(tagged(DICT, [Term::List(items)]))
}

fn encode_regex(regex: &RegexValue) -> Result<Term> {
    let options = encode_options(regex.flags())?;
    Ok(tagged(
        REGEX,
        [
            Term::Binary(Bytes::copy_from_slice(regex.pattern().as_bytes())),
            Term::List(options.into_iter().map(Term::Atom).collect()),
        ],
    ))
}
