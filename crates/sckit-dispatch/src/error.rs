use sckit_types::CodecError;

/// Reasons an invocation is aborted.
///
/// Every variant is fatal to the current call. Writes made before the
/// abort are not rolled back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No entry point matches the requested hname or index.
    #[error("unknown entry point: {0}")]
    UnknownEntryPoint(String),

    /// An owner-only entry point was called before the owner field was set.
    #[error("access not set: {0}")]
    AccessNotSet(String),

    /// The caller is not the identity the entry point requires.
    #[error("no permission")]
    NoPermission,

    /// A mandatory parameter is absent from the call payload.
    #[error("missing mandatory {0}")]
    MissingParameter(String),

    /// The call payload exceeds a configured limit.
    #[error("payload too large: {what} {actual} exceeds limit {limit}")]
    PayloadTooLarge {
        what: &'static str,
        limit: usize,
        actual: usize,
    },

    /// Two entry points share a name or an hname.
    #[error("duplicate entry point: {0}")]
    DuplicateEntry(String),

    /// A view or check tried to write persistent state.
    #[error("write to read-only state: {0}")]
    ReadOnlyState(String),

    /// A handler gave up on the call.
    #[error("{0}")]
    Aborted(String),

    /// A value could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl DispatchError {
    /// Create a handler abort with a message.
    pub fn abort(message: impl Into<String>) -> Self {
        Self::Aborted(message.into())
    }
}

/// Convenience alias for dispatch results.
pub type DispatchResult<T> = Result<T, DispatchError>;
