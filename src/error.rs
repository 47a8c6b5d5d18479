/// Boxed error raised by user code: a coroutine body, a mapper, a relay, or a
/// fault payload.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The errors that can come out of driving a coroutine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The coroutine was driven in a way that breaks the
    /// produce/accept/return contract, e.g. `sendreturn()` expected the
    /// coroutine to return but it produced another value.
    ///
    /// This always indicates a bug in the calling code.
    #[error("protocol violation: {0}")]
    ProtocolViolation(&'static str),

    /// The coroutine has no way to receive the requested operation. The
    /// rejected fault is kept so that a delegating coroutine can re-raise it
    /// unchanged.
    #[error("{operation} is not supported by this coroutine")]
    UnsupportedOperation {
        operation: &'static str,
        #[source]
        payload: Box<Error>,
    },

    /// A reusable coroutine was bound without one of its required
    /// parameters.
    #[error("{function}() missing required argument: {parameter}")]
    MissingArgument {
        function: &'static str,
        parameter: &'static str,
    },

    /// An error raised by user code.
    #[error(transparent)]
    User(BoxError),
}

impl Error {
    /// Wraps any error raised by user code.
    pub fn user(error: impl Into<BoxError>) -> Self {
        Error::User(error.into())
    }

    /// Returns the user error if it is of type `T`.
    ///
    /// This is how a coroutine "catches" a particular fault in its `fault()`
    /// implementation.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: std::error::Error + 'static,
    {
        match self {
            Error::User(e) => e.downcast_ref(),
            _ => None,
        }
    }

    /// Returns `true` if this is a user error of type `T`.
    pub fn is<T>(&self) -> bool
    where
        T: std::error::Error + 'static,
    {
        self.downcast_ref::<T>().is_some()
    }
}
