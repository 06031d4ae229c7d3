//! Parser-local failure signal.

/// Marker that the current declaration cannot be completed.
///
/// This is *not* a user-facing error: the diagnostic has already been
/// recorded by the time a `ParseError` is produced. The value only
/// unwinds the descent back to the declaration boundary, where the
/// parser synchronizes and continues. It deliberately shares nothing
/// with the evaluator's runtime fault type.
#[derive(Debug)]
pub(crate) struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;
