use thiserror::Error;

/// Errors surfaced by the extraction and ranking entry points.
///
/// Empty input is never an error: text that filters down to nothing flows
/// through every stage as an empty collection. Failures below are reported
/// synchronously to the immediate caller, never swallowed.
#[derive(Debug, Error)]
pub enum KeyrankError {
    /// A caller-supplied parameter is outside its valid range, e.g. an
    /// iteration cap of zero.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Sentence extraction was handed something that is neither a single
    /// text nor a sequence of texts.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),
}
