/// Errors that can occur when configuring a frame extractor.
///
/// Malformed data on the wire is never an error: access-code and
/// duplicate-length mismatches reset the extractor to its searching state
/// and the bits are discarded.
#[derive(Debug, thiserror::Error)]
pub enum DeframeError {
    /// An access code was built from a slice of the wrong length.
    #[error("access code must be exactly {expected} bytes (got {len})")]
    InvalidAccessCodeLength { len: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, DeframeError>;
