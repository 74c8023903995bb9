//! Primitive Erlang external term format (ETF) for the BERT layer.
//!
//! Provides the closed term model every BERT value is lowered into, and the
//! codec that turns it into bytes and back:
//! - [`Term`] — atom, tuple, list, binary, integer, float
//! - [`encode_term`] / [`decode_term`] — version-prefixed ETF (magic byte 131)
//! - [`decode_term_bytes`] — the same, slicing binaries out of a shared buffer
//!
//! Only the primitive shapes BERT needs are accepted. Maps, pids, ports,
//! references, funs, compressed terms and improper lists are rejected on
//! decode with a [`TermError`].

pub mod atom;
pub mod codec;
pub mod config;
pub mod error;
pub mod tag;
pub mod term;

pub use atom::Atom;
pub use codec::{
    decode_term, decode_term_bytes, decode_term_bytes_with, decode_term_with, encode_term,
    encode_term_with,
};
pub use config::{
    TermConfig, DEFAULT_MAX_BINARY_SIZE, DEFAULT_MAX_COLLECTION_LEN, DEFAULT_MAX_DEPTH,
};
pub use error::{Result, TermError};
pub use term::Term;
