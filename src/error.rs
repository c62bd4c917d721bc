//! Error types surfaced by route registration, lookup, and URL parsing.

use core::fmt;

/// Errors that can occur while registering a route with [`Router::add_route`](crate::Router::add_route).
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InsertError {
    /// The URL adapter rejected the route's URL string.
    UrlParse(UrlAdapterError),

    /// A path segment was `":"` with nothing left after trimming.
    EmptyVariableName,

    /// The same trie position already carries a variable with a different
    /// name than the one being inserted.
    VariableConflict {
        /// The variable name already registered at this position.
        existing: String,
        /// The variable name the failed insertion attempted to register.
        attempted: String,
    },

    /// A variable and a catch-all (named or anonymous) were both requested at
    /// the same trie position.
    CatchAllConflict {
        /// Name of the existing wildcard child, empty for an anonymous catch-all.
        existing: String,
    },

    /// The same trie position already carries a catch-all with a different
    /// name, or a bare catch-all conflicts with a named one (or vice versa).
    CatchVariableConflict {
        /// Name of the existing catch-all, empty if it was anonymous.
        existing: String,
        /// Name the failed insertion attempted to register, empty if anonymous.
        attempted: String,
    },

    /// A leaf with an identical query-shape already exists at the target node.
    AlreadyAdded,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UrlParse(err) => write!(f, "could not parse route url: {err}"),
            Self::EmptyVariableName => write!(f, "path segment \":\" has no variable name"),
            Self::VariableConflict { existing, attempted } => {
                write!(
                    f,
                    "variable conflict: position already bound to \"{existing}\", attempted \"{attempted}\""
                )
            }
            Self::CatchAllConflict { existing } => {
                write!(f, "catch-all conflicts with existing variable \"{existing}\" at the same position")
            }
            Self::CatchVariableConflict { existing, attempted } => {
                write!(
                    f,
                    "catch-all conflict: position already bound to \"{existing}\", attempted \"{attempted}\""
                )
            }
            Self::AlreadyAdded => write!(f, "a route with an identical path and query-shape is already registered"),
        }
    }
}

impl core::error::Error for InsertError {}

impl From<UrlAdapterError> for InsertError {
    fn from(err: UrlAdapterError) -> Self {
        Self::UrlParse(err)
    }
}

/// Error returned by [`Router::lookup`](crate::Router::lookup) when the input
/// URL itself cannot be parsed.
///
/// A well-formed URL that simply matches no registered route is *not* an
/// error; it is represented as `Ok(None)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LookupError(pub(crate) UrlAdapterError);

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse lookup url: {}", self.0)
    }
}

impl core::error::Error for LookupError {}

/// The URL adapter (see [`crate::url`]) could not decompose the given string
/// into `(host, path, query)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UrlAdapterError {
    pub(crate) url: String,
    pub(crate) reason: String,
}

impl UrlAdapterError {
    pub(crate) fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for UrlAdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid url \"{}\": {}", self.url, self.reason)
    }
}

impl core::error::Error for UrlAdapterError {}
