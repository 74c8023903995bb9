//! External term format tag bytes.
//!
//! Only the tags the primitive codec reads or writes are listed.

/// Leading version byte of every encoded term.
pub const VERSION_MAGIC: u8 = 131;

/// IEEE 754 double, 8 bytes big-endian.
pub const NEW_FLOAT_EXT: u8 = 70;

/// Unsigned 8-bit integer.
pub const SMALL_INTEGER_EXT: u8 = 97;

/// Signed 32-bit big-endian integer.
pub const INTEGER_EXT: u8 = 98;

/// Legacy float: 31 bytes of `%.20e` text, NUL padded.
pub const FLOAT_EXT: u8 = 99;

/// Latin-1 atom with a 2-byte length.
pub const ATOM_EXT: u8 = 100;

/// Tuple with a 1-byte arity.
pub const SMALL_TUPLE_EXT: u8 = 104;

/// Tuple with a 4-byte arity.
pub const LARGE_TUPLE_EXT: u8 = 105;

/// The empty list.
pub const NIL_EXT: u8 = 106;

/// A list of bytes, packed.
pub const STRING_EXT: u8 = 107;

/// List with a 4-byte length followed by a tail.
pub const LIST_EXT: u8 = 108;

/// Binary with a 4-byte length.
pub const BINARY_EXT: u8 = 109;

/// Bignum with a 1-byte digit count.
pub const SMALL_BIG_EXT: u8 = 110;

/// Bignum with a 4-byte digit count.
pub const LARGE_BIG_EXT: u8 = 111;

/// Latin-1 atom with a 1-byte length.
pub const SMALL_ATOM_EXT: u8 = 115;

/// UTF-8 atom with a 2-byte length.
pub const ATOM_UTF8_EXT: u8 = 118;

/// UTF-8 atom with a 1-byte length.
pub const SMALL_ATOM_UTF8_EXT: u8 = 119;

/// Returns a human-readable name for a tag byte.
pub fn tag_name(tag: u8) -> &'static str {
    match tag {
        NEW_FLOAT_EXT => "NEW_FLOAT_EXT",
        SMALL_INTEGER_EXT => "SMALL_INTEGER_EXT",
        INTEGER_EXT => "INTEGER_EXT",
        FLOAT_EXT => "FLOAT_EXT",
        ATOM_EXT => "ATOM_EXT",
        SMALL_TUPLE_EXT => "SMALL_TUPLE_EXT",
        LARGE_TUPLE_EXT => "LARGE_TUPLE_EXT",
        NIL_EXT => "NIL_EXT",
        STRING_EXT => "STRING_EXT",
        LIST_EXT => "LIST_EXT",
        BINARY_EXT => "BINARY_EXT",
        SMALL_BIG_EXT => "SMALL_BIG_EXT",
        LARGE_BIG_EXT => "LARGE_BIG_EXT",
        SMALL_ATOM_EXT => "SMALL_ATOM_EXT",
        ATOM_UTF8_EXT => "ATOM_UTF8_EXT",
        SMALL_ATOM_UTF8_EXT => "SMALL_ATOM_UTF8_EXT",
        80 => "COMPRESSED",
        116 => "MAP_EXT",
        88 | 103 => "PID_EXT",
        89 | 102 => "PORT_EXT",
        90 | 101 | 114 => "REFERENCE_EXT",
        112 | 113 | 117 => "FUN_EXT",
        77 => "BIT_BINARY_EXT",
        _ => "UNKNOWN",
    }
}
