use std::borrow::Cow;
use std::fmt;

/// An Erlang atom: a symbolic name compared by value.
///
/// Atoms built with [`Atom::from_static`] are usable in `const` items, which
/// is how the fixed BERT tag and option atoms are declared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(Cow<'static, str>);

impl Atom {
    /// Create an atom from any owned or static string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Create an atom from a static name in a `const` context.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The atom's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Atom {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Atom {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
