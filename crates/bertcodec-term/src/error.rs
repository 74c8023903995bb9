/// Errors that can occur while encoding or decoding primitive terms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TermError {
    /// The buffer does not start with the version byte.
    #[error("invalid version byte {0} (expected 131)")]
    InvalidVersion(u8),

    /// The buffer ended in the middle of a term.
    #[error("truncated term: needed {needed} more bytes at offset {offset}")]
    Truncated { offset: usize, needed: usize },

    /// The tag byte names a term kind outside the primitive set.
    #[error("unsupported term tag {tag} ({name}) at offset {offset}")]
    UnsupportedTag {
        tag: u8,
        name: &'static str,
        offset: usize,
    },

    /// A bignum does not fit in a signed 64-bit integer.
    #[error("integer does not fit in 64 bits ({digits} digit bytes)")]
    IntegerOverflow { digits: usize },

    /// An atom's text is not valid for its encoding.
    #[error("invalid atom text: {0}")]
    InvalidAtom(String),

    /// A legacy float could not be parsed.
    #[error("invalid float text: {0:?}")]
    InvalidFloat(String),

    /// A list's tail is not the empty list.
    #[error("improper list (tail tag {0})")]
    ImproperList(u8),

    /// Bytes remain after the top-level term.
    #[error("{0} trailing bytes after term")]
    TrailingBytes(usize),

    /// Tuples and lists are nested deeper than allowed.
    #[error("term nesting exceeds {max} levels")]
    DepthExceeded { max: usize },

    /// A value exceeds a configured or wire-format size limit.
    #[error("{what} too large ({size}, max {max})")]
    TooLarge {
        what: &'static str,
        size: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, TermError>;
