//! Normalized command representation.
//!
//! Every call on the client interface is reduced to a [`Command`]: the lower-case
//! command name and its ordered, binary-safe arguments. This is what a real client
//! serializes to the wire and what the test double matches expectations against.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// A single binary-safe command argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arg(Vec<u8>);

impl Arg {
    /// Raw bytes of the argument.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The argument as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for Arg {
    fn from(b: &[u8]) -> Self {
        Self(b.to_vec())
    }
}

impl From<Vec<u8>> for Arg {
    fn from(b: Vec<u8>) -> Self {
        Self(b)
    }
}

impl From<&Arg> for Arg {
    fn from(a: &Arg) -> Self {
        a.clone()
    }
}

macro_rules! arg_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Self(v.to_string().into_bytes())
                }
            }
        )*
    };
}

arg_from_display!(i32, i64, u32, u64, usize, f64);

/// Argument list; most commands carry only a handful.
pub type Args = SmallVec<[Arg; 4]>;

/// A normalized command: lower-case name plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
    name: String,
    args: Args,
}

impl Command {
    /// Start a command with the given name. The name is lower-cased.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            args: SmallVec::new(),
        }
    }

    /// Build a command from a raw argument vector whose first element is the name.
    ///
    /// An empty vector yields a command with an empty name.
    #[must_use]
    pub fn from_raw(raw: &[Arg]) -> Self {
        match raw.split_first() {
            Some((name, rest)) => Self {
                name: name.to_str_lossy().to_ascii_lowercase(),
                args: rest.iter().cloned().collect(),
            },
            None => Self::new(""),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append every argument of an iterator.
    #[must_use]
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append `arg` only when `cond` holds (for optional flags such as `NX`).
    #[must_use]
    pub fn arg_if(self, cond: bool, arg: impl Into<Arg>) -> Self {
        if cond { self.arg(arg) } else { self }
    }

    /// The lower-case command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The arguments, without the name.
    #[must_use]
    pub fn arguments(&self) -> &[Arg] {
        &self.args
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
