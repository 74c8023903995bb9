use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use crate::atom::Atom;
use crate::config::TermConfig;
use crate::error::{Result, TermError};
use crate::tag::*;
use crate::term::Term;

const INITIAL_BUFFER_CAPACITY: usize = 256;

/// Size of a legacy `FLOAT_EXT` payload.
const LEGACY_FLOAT_LEN: usize = 31;

/// Encode a term with the default configuration.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────────────────────┐
/// │ Version (1B) │ Term (tag byte + payload)    │
/// │ 131          │                              │
/// └──────────────┴──────────────────────────────┘
/// ```
pub fn encode_term(term: &Term) -> Result<Bytes> {
    encode_term_with(term, &TermConfig::default())
}

/// Encode a term, enforcing `config.max_depth`.
pub fn encode_term_with(term: &Term, config: &TermConfig) -> Result<Bytes> {
    let mut dst = BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY);
    dst.put_u8(VERSION_MAGIC);
    encode_inner(term, &mut dst, 0, config.max_depth)?;
    trace!(len = dst.len(), "encoded term");
    Ok(dst.freeze())
}

fn encode_inner(term: &Term, dst: &mut BytesMut, depth: usize, max_depth: usize) -> Result<()> {
    match term {
        Term::Atom(atom) => encode_atom(atom, dst)?,
        Term::Integer(value) => encode_integer(*value, dst),
        Term::Float(value) => {
            dst.put_u8(NEW_FLOAT_EXT);
            dst.put_f64(*value);
        }
        Term::Binary(data) => {
            let len = wire_len("binary", data.len())?;
            dst.reserve(5 + data.len());
            dst.put_u8(BINARY_EXT);
            dst.put_u32(len);
            dst.put_slice(data);
        }
        Term::Tuple(elements) => {
            let depth = enter(depth, max_depth)?;
            match u8::try_from(elements.len()) {
                Ok(arity) => {
                    dst.put_u8(SMALL_TUPLE_EXT);
                    dst.put_u8(arity);
                }
                Err(_) => {
                    dst.put_u8(LARGE_TUPLE_EXT);
                    dst.put_u32(wire_len("tuple", elements.len())?);
                }
            }
            for element in elements {
                encode_inner(element, dst, depth, max_depth)?;
            }
        }
        Term::List(elements) if elements.is_empty() => dst.put_u8(NIL_EXT),
        Term::List(elements) => {
            let depth = enter(depth, max_depth)?;
            dst.put_u8(LIST_EXT);
            dst.put_u32(wire_len("list", elements.len())?);
            for element in elements {
                encode_inner(element, dst, depth, max_depth)?;
            }
            dst.put_u8(NIL_EXT);
        }
    }
    Ok(())
}

fn encode_atom(atom: &Atom, dst: &mut BytesMut) -> Result<()> {
    let name = atom.as_str().as_bytes();
    match u8::try_from(name.len()) {
        Ok(len) => {
            dst.put_u8(SMALL_ATOM_UTF8_EXT);
            dst.put_u8(len);
        }
        Err(_) => {
            let len = u16::try_from(name.len()).map_err(|_| TermError::TooLarge {
                what: "atom",
                size: name.len(),
                max: u16::MAX as usize,
            })?;
            dst.put_u8(ATOM_UTF8_EXT);
            dst.put_u16(len);
        }
    }
    dst.put_slice(name);
    Ok(())
}

fn encode_integer(value: i64, dst: &mut BytesMut) {
    if let Ok(small) = u8::try_from(value) {
        dst.put_u8(SMALL_INTEGER_EXT);
        dst.put_u8(small);
    } else if let Ok(int) = i32::try_from(value) {
        dst.put_u8(INTEGER_EXT);
        dst.put_i32(int);
    } else {
        // Bignum digits are little-endian bytes of the magnitude.
        let magnitude = value.unsigned_abs();
        let digits = 8 - (magnitude.leading_zeros() / 8) as usize;
        dst.put_u8(SMALL_BIG_EXT);
        dst.put_u8(digits as u8);
        dst.put_u8(u8::from(value < 0));
        dst.put_slice(&magnitude.to_le_bytes()[..digits]);
    }
}

fn wire_len(what: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| TermError::TooLarge {
        what,
        size: len,
        max: u32::MAX as usize,
    })
}

fn enter(depth: usize, max_depth: usize) -> Result<usize> {
    if depth >= max_depth {
        debug!(max_depth, "term nesting limit reached");
        return Err(TermError::DepthExceeded { max: max_depth });
    }
    Ok(depth + 1)
}

/// Decode a term with the default configuration.
///
/// The input is only borrowed; it is never modified.
pub fn decode_term(data: &[u8]) -> Result<Term> {
    decode_term_with(data, &TermConfig::default())
}

/// Decode a term, enforcing every limit in `config`.
///
/// The input is copied once; decoded binaries then share that copy. Use
/// [`decode_term_bytes_with`] to avoid the copy when the data is already
/// held in [`Bytes`].
pub fn decode_term_with(data: &[u8], config: &TermConfig) -> Result<Term> {
    decode_term_bytes_with(Bytes::copy_from_slice(data), config)
}

/// Decode a term held in [`Bytes`] with the default configuration.
pub fn decode_term_bytes(data: Bytes) -> Result<Term> {
    decode_term_bytes_with(data, &TermConfig::default())
}

/// Decode a term held in [`Bytes`], enforcing every limit in `config`.
///
/// Decoded binaries are slices of `data`, not copies. The whole buffer must
/// hold exactly one term.
pub fn decode_term_bytes_with(data: Bytes, config: &TermConfig) -> Result<Term> {
    let total = data.len();
    let mut src = data;
    if !src.has_remaining() {
        return Err(TermError::Truncated {
            offset: 0,
            needed: 1,
        });
    }
    let version = src.get_u8();
    if version != VERSION_MAGIC {
        debug!(version, "rejecting term with bad version byte");
        return Err(TermError::InvalidVersion(version));
    }

    let mut reader = Reader { src, total, config };
    let term = reader.term(0)?;
    if reader.src.has_remaining() {
        return Err(TermError::TrailingBytes(reader.src.remaining()));
    }

    trace!(len = total, kind = term.kind(), "decoded term");
    Ok(term)
}

struct Reader<'a> {
    src: Bytes,
    total: usize,
    config: &'a TermConfig,
}

impl Reader<'_> {
    fn offset(&self) -> usize {
        self.total - self.src.remaining()
    }

    fn need(&self, n: usize) -> Result<()> {
        let remaining = self.src.remaining();
        if remaining < n {
            return Err(TermError::Truncated {
                offset: self.offset(),
                needed: n - remaining,
            });
        }
        Ok(())
    }

    fn u8(&mut self) -> Result<u8> {
        self.need(1)?;
        Ok(self.src.get_u8())
    }

    fn u16(&mut self) -> Result<u16> {
        self.need(2)?;
        Ok(self.src.get_u16())
    }

    fn u32(&mut self) -> Result<u32> {
        self.need(4)?;
        Ok(self.src.get_u32())
    }

    fn take(&mut self, n: usize) -> Result<Bytes> {
        self.need(n)?;
        Ok(self.src.split_to(n))
    }

    /// Check a declared element count and step one level deeper.
    fn open_collection(&self, len: usize, depth: usize) -> Result<usize> {
        let depth = enter(depth, self.config.max_depth)?;
        if len > self.config.max_collection_len {
            debug!(len, max = self.config.max_collection_len, "collection exceeds limit");
            return Err(TermError::TooLarge {
                what: "collection",
                size: len,
                max: self.config.max_collection_len,
            });
        }
        Ok(depth)
    }

    fn term(&mut self, depth: usize) -> Result<Term> {
        let offset = self.offset();
        let tag = self.u8()?;
        match tag {
            SMALL_INTEGER_EXT => Ok(Term::Integer(i64::from(self.u8()?))),
            INTEGER_EXT => {
                self.need(4)?;
                Ok(Term::Integer(i64::from(self.src.get_i32())))
            }
            SMALL_BIG_EXT => {
                let digits = self.u8()? as usize;
                self.bignum(digits)
            }
            LARGE_BIG_EXT => {
                let digits = self.u32()? as usize;
                self.bignum(digits)
            }
            NEW_FLOAT_EXT => {
                self.need(8)?;
                Ok(Term::Float(self.src.get_f64()))
            }
            FLOAT_EXT => self.legacy_float(),
            SMALL_ATOM_UTF8_EXT => {
                let len = self.u8()? as usize;
                self.utf8_atom(len)
            }
            ATOM_UTF8_EXT => {
                let len = self.u16()? as usize;
                self.utf8_atom(len)
            }
            SMALL_ATOM_EXT => {
                let len = self.u8()? as usize;
                self.latin1_atom(len)
            }
            ATOM_EXT => {
                let len = self.u16()? as usize;
                self.latin1_atom(len)
            }
            SMALL_TUPLE_EXT => {
                let arity = self.u8()? as usize;
                self.elements(arity, depth).map(Term::Tuple)
            }
            LARGE_TUPLE_EXT => {
                let arity = self.u32()? as usize;
                self.elements(arity, depth).map(Term::Tuple)
            }
            NIL_EXT => Ok(Term::nil()),
            STRING_EXT => {
                let len = self.u16()? as usize;
                self.open_collection(len, depth)?;
                let bytes = self.take(len)?;
                Ok(Term::List(
                    bytes.iter().map(|&b| Term::Integer(i64::from(b))).collect(),
                ))
            }
            LIST_EXT => {
                let len = self.u32()? as usize;
                let elements = self.elements(len, depth)?;
                match self.u8()? {
                    NIL_EXT => Ok(Term::List(elements)),
                    tail => {
                        debug!(tail, tail_name = tag_name(tail), "rejecting improper list");
                        Err(TermError::ImproperList(tail))
                    }
                }
            }
            BINARY_EXT => {
                let len = self.u32()? as usize;
                if len > self.config.max_binary_size {
                    debug!(len, max = self.config.max_binary_size, "binary exceeds limit");
                    return Err(TermError::TooLarge {
                        what: "binary",
                        size: len,
                        max: self.config.max_binary_size,
                    });
                }
                self.take(len).map(Term::Binary)
            }
            other => {
                let name = tag_name(other);
                debug!(tag = other, name, offset, "unsupported term tag");
                Err(TermError::UnsupportedTag {
                    tag: other,
                    name,
                    offset,
                })
            }
        }
    }

    fn elements(&mut self, len: usize, depth: usize) -> Result<Vec<Term>> {
        let depth = self.open_collection(len, depth)?;
        // Every element takes at least one byte, so the remaining input bounds
        // the allocation even when the declared length is hostile.
        let mut elements = Vec::with_capacity(len.min(self.src.remaining()));
        for _ in 0..len {
            elements.push(self.term(depth)?);
        }
        Ok(elements)
    }

    fn bignum(&mut self, digits: usize) -> Result<Term> {
        let sign = self.u8()?;
        let bytes = self.take(digits)?;
        let significant = bytes.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
        if significant > 8 {
            return Err(TermError::IntegerOverflow { digits });
        }

        let magnitude = bytes[..significant]
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &d)| acc | (u64::from(d) << (8 * i)));

        let value = if sign == 0 {
            i64::try_from(magnitude).map_err(|_| TermError::IntegerOverflow { digits })?
        } else {
            0i64.checked_sub_unsigned(magnitude)
                .ok_or(TermError::IntegerOverflow { digits })?
        };
        Ok(Term::Integer(value))
    }

    fn legacy_float(&mut self) -> Result<Term> {
        let raw = self.take(LEGACY_FLOAT_LEN)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        let text = std::str::from_utf8(&raw[..end]).map_err(|_| {
            TermError::InvalidFloat(String::from_utf8_lossy(&raw[..end]).into_owned())
        })?;
        text.trim()
            .parse::<f64>()
            .map(Term::Float)
            .map_err(|_| TermError::InvalidFloat(text.to_owned()))
    }

    fn utf8_atom(&mut self, len: usize) -> Result<Term> {
        let raw = self.take(len)?;
        let name =
            std::str::from_utf8(&raw).map_err(|err| TermError::InvalidAtom(err.to_string()))?;
        Ok(Term::Atom(Atom::new(name.to_owned())))
    }

    fn latin1_atom(&mut self, len: usize) -> Result<Term> {
        let raw = self.take(len)?;
        let name: String = raw.iter().map(|&b| char::from(b)).collect();
        Ok(Term::Atom(Atom::new(name)))
    }
}
