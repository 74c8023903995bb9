//! BERT value model and tag mapping.
//!
//! BERT represents values ETF has no native shape for by wrapping them in
//! tuples headed by the `bert` atom:
//!
//! | value | term |
//! |---|---|
//! | nil | `{bert, nil}` |
//! | true / false | `{bert, true}` / `{bert, false}` |
//! | map | `{bert, dict, [{Key, Value}, ...]}` |
//! | regex | `{bert, regex, Source, [Option, ...]}` |
//! | time | `{bert, time, MegaSecs, Secs, MilliSecs}` |
//!
//! [`encode`] lowers a [`Value`] into a [`Term`](bertcodec_term::Term);
//! [`decode`] recognizes the tag tuples and rebuilds the value. Neither does
//! any I/O. Byte-level serialization lives in `bertcodec-term`.

pub mod decode;
pub mod encode;
pub mod error;
pub mod regex;
pub mod tags;
pub mod time;
pub mod value;

pub use decode::decode;
pub use encode::encode;
pub use error::{BertError, Result};
pub use regex::{RegexFlags, RegexValue};
pub use time::TimeComponents;
pub use value::{BertMap, Value};
