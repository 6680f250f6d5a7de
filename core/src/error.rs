/*!
Error types for item and collection operations
*/
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors reported by fallible itemkit operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was not supplied
    #[error("missing required argument `{0}`")]
    AbsentInput(&'static str),

    /// The allocator could not satisfy a request
    #[error("failed to allocate {what}: {source}")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    /// Strict name construction was given more bytes than fit
    #[error("name is {len} bytes long, but at most {max} fit")]
    NameTooLong { len: usize, max: usize },

    /// Default ids are item indices and must fit in an `i32`
    #[error("cannot create {requested} items, at most {max} are addressable")]
    TooManyItems { requested: usize, max: usize },
}

impl Error {
    pub(crate) fn allocation(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| Error::Allocation { what, source }
    }
}

/// Unwrap a required argument, reporting [`Error::AbsentInput`] for `None`.
pub(crate) fn require<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        tracing::debug!(argument, "required argument absent");
        Error::AbsentInput(argument)
    })
}

/// Result type for itemkit operations
pub type Result<T> = std::result::Result<T, Error>;
