//! Regular expressions and the BERT regex option table.
//!
//! BERT carries a regex as `{bert, regex, Source, Options}` where `Options`
//! is a list of atoms. Only a few native flags have an option atom; anything
//! else is rejected on encode rather than silently dropped.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use bertcodec_term::Atom;
use tracing::debug;

use crate::error::{BertError, Result};

pub const UNICODE: Atom = Atom::from_static("unicode");
pub const CASELESS: Atom = Atom::from_static("caseless");
pub const MULTILINE: Atom = Atom::from_static("multiline");
pub const NO_AUTO_CAPTURE: Atom = Atom::from_static("no_auto_capture");
pub const DOTALL: Atom = Atom::from_static("dotall");

/// Native regex engine flags.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RegexFlags(u32);

impl RegexFlags {
    pub const EMPTY: Self = Self(0);
    /// Letters match regardless of case.
    pub const CASE_INSENSITIVE: Self = Self(1 << 0);
    /// Case folding ignores the current locale.
    pub const LOCALE_INVARIANT: Self = Self(1 << 1);
    /// `^` and `$` match at line boundaries.
    pub const MULTI_LINE: Self = Self(1 << 2);
    /// `.` also matches `\n`.
    pub const DOT_MATCHES_NEW_LINE: Self = Self(1 << 3);
    /// Only named groups capture.
    pub const EXPLICIT_CAPTURE: Self = Self(1 << 4);
    /// Unescaped whitespace and `#` comments in the pattern are ignored.
    pub const IGNORE_WHITESPACE: Self = Self(1 << 5);
    /// Matching proceeds from the end of the input.
    pub const RIGHT_TO_LEFT: Self = Self(1 << 6);
    /// Quantifiers are lazy by default.
    pub const SWAP_GREED: Self = Self(1 << 7);

    const NAMED: [(Self, &'static str); 8] = [
        (Self::CASE_INSENSITIVE, "CASE_INSENSITIVE"),
        (Self::LOCALE_INVARIANT, "LOCALE_INVARIANT"),
        (Self::MULTI_LINE, "MULTI_LINE"),
        (Self::DOT_MATCHES_NEW_LINE, "DOT_MATCHES_NEW_LINE"),
        (Self::EXPLICIT_CAPTURE, "EXPLICIT_CAPTURE"),
        (Self::IGNORE_WHITESPACE, "IGNORE_WHITESPACE"),
        (Self::RIGHT_TO_LEFT, "RIGHT_TO_LEFT"),
        (Self::SWAP_GREED, "SWAP_GREED"),
    ];

    const ALL: u32 = (1 << 8) - 1;

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `None` if `bits` contains undefined flags.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::ALL == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for RegexFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for RegexFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("EMPTY");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegexFlags({self})")
    }
}

/// A regex pattern together with its native flags.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegexValue {
    pattern: String,
    flags: RegexFlags,
}

impl RegexValue {
    pub fn new(pattern: impl Into<String>, flags: RegexFlags) -> Self {
        Self {
            pattern: pattern.into(),
            flags,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }
}

/// Option atoms and the native flags each stands for, in encode order.
///
/// `unicode` stands for no flag; it is always emitted first.
pub static OPTION_TABLE: [(Atom, RegexFlags); 5] = [
    (UNICODE, RegexFlags::EMPTY),
    (
        CASELESS,
        RegexFlags::CASE_INSENSITIVE.union(RegexFlags::LOCALE_INVARIANT),
    ),
    (MULTILINE, RegexFlags::MULTI_LINE),
    (NO_AUTO_CAPTURE, RegexFlags::EXPLICIT_CAPTURE),
    (DOTALL, RegexFlags::DOT_MATCHES_NEW_LINE),
];

/// Translate native flags into BERT option atoms.
///
/// Case-insensitive matching is only representable together with
/// locale-invariant case folding. Flags left over once every table row has
/// been applied fail the whole encode.
pub fn encode_options(flags: RegexFlags) -> Result<Vec<Atom>> {
    if flags.contains(RegexFlags::CASE_INSENSITIVE)
        && !flags.contains(RegexFlags::LOCALE_INVARIANT)
    {
        debug!(%flags, "case-insensitive regex without locale-invariant folding");
        return Err(BertError::UnsupportedOption(
            "case-insensitive matching requires LOCALE_INVARIANT".to_string(),
        ));
    }

    let mut options = vec![UNICODE];
    let mut residual = flags;
    for (atom, native) in OPTION_TABLE.iter() {
        if native.is_empty() {
            continue;
        }
        if residual.contains(*native) {
            options.push(atom.clone());
            residual.remove(*native);
        }
    }

    if !residual.is_empty() {
        debug!(%residual, "regex flags have no bert option");
        return Err(BertError::UnsupportedOption(format!("regex flags {residual}")));
    }
    Ok(options)
}

/// Translate BERT option atoms back into native flags.
pub fn decode_options<'a>(options: impl IntoIterator<Item = &'a Atom>) -> Result<RegexFlags> {
    let mut flags = RegexFlags::EMPTY;
    for option in options {
        let Some((_, native)) = OPTION_TABLE.iter().find(|(atom, _)| atom == option) else {
            debug!(%option, "unknown regex option");
            return Err(BertError::UnsupportedOption(format!("regex option {option}")));
        };
        flags |= *native;
    }
    Ok(flags)
}
