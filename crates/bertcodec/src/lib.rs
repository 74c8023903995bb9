//! BERT (Binary ERlang Term) encoding and decoding.
//!
//! BERT layers richer values (nil, booleans, maps, regexes, times) on top of
//! the Erlang external term format using `{bert, ...}` tag tuples.
//!
//! ```
//! use bertcodec::{decode, encode, Value};
//!
//! let value = Value::map([("name", Value::from("bert")), ("ok", Value::Bool(true))]);
//! let bytes = encode(&value).unwrap();
//! let back = decode(&bytes).unwrap();
//! assert_eq!(back.get("ok"), Some(&Value::Bool(true)));
//! ```
//!
//! # Crate Structure
//!
//! - [`term`] — Primitive term model and external-format codec
//! - [`value`] — Value model and BERT tag mapping
//! - [`BertCodec`] — The two composed, with configurable decode limits

pub mod codec;

/// Re-export primitive term types.
pub mod term {
    pub use bertcodec_term::*;
}

/// Re-export value mapping types.
pub mod value {
    pub use bertcodec_value::*;
}

pub use bertcodec_term::{Atom, Term, TermConfig, TermError};
pub use bertcodec_value::{BertError, BertMap, RegexFlags, RegexValue, Result, Value};
pub use codec::{decode, encode, BertCodec};
