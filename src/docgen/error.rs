use thiserror::Error;

/// Errors that can occur while generating documentation.
///
/// Results are shared between every requester of a named schema, so the
/// error is `Clone`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocGenError {
    /// A forward placeholder was dropped before it was resolved
    #[error("forward placeholder at depth {depth} was abandoned before it was resolved")]
    ForwardAbandoned {
        /// Nesting depth at which the placeholder was met
        depth: usize,
    },

    /// Nesting went deeper than the configured limit
    #[error("schema nesting depth {depth} exceeds the limit of {max}")]
    DepthExceeded {
        /// Depth that was reached
        depth: usize,
        /// Configured limit
        max: usize,
    },
}
