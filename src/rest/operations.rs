//! REST operations a resource or collection can enable.

use crate::clients::HttpMethod;

/// An operation a resource schema can enable.
///
/// Each operation maps to a fixed HTTP method on the wire. [`Operation::Put`]
/// and [`Operation::GetOverPost`] both travel as POST requests: the former
/// because the API convention sends writes over POST, the latter so that
/// read parameters too large or sensitive for a query string can be carried
/// in a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetch a single representation with a GET request.
    Get,
    /// Fetch a single representation with a POST request carrying the
    /// parameters as a JSON body.
    GetOverPost,
    /// Upload the instance, sent as a POST request.
    Put,
    /// Delete the addressed representation with a DELETE request.
    Delete,
}

impl Operation {
    /// The HTTP method this operation uses on the wire.
    #[must_use]
    pub const fn http_method(self) -> HttpMethod {
        match self {
            Self::Get => HttpMethod::Get,
            Self::GetOverPost | Self::Put => HttpMethod::Post,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// The operation's name, as used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::GetOverPost => "get_over_post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
