//! Resumable frame extraction from a marker-tagged bit stream.
//!
//! This is the receive-side framer of syncframe. The upstream demodulator
//! delivers single-bit values in chunks of arbitrary size and annotates the
//! stream with frame-start markers at absolute bit positions. The extractor
//! walks a four-state machine over those chunks:
//!
//! - **Searching** — skip to the next frame-start marker
//! - **AccessCode** — verify the fixed 64-bit alignment pattern
//! - **Length** — read a 16-bit byte count, sent twice, which must agree
//! - **Payload** — collect the declared bits and publish them as one PDU
//!
//! Parsing state survives across calls, so frames may be split at any bit
//! boundary. Malformed frames never raise errors; the machine resets to
//! searching and the bits are discarded.

pub mod access;
pub mod error;
pub mod extractor;
pub mod marker;
pub mod sink;
pub mod stats;

pub use access::{AccessCode, DEFAULT_ACCESS_CODE};
pub use error::{DeframeError, Result};
pub use extractor::{
    ExtractorConfig, FrameExtractor, ParserState, ACCESS_CODE_BITS, LENGTH_FIELD_BITS,
};
pub use marker::{MarkerKind, MarkerSource, SyncMarker};
pub use sink::{PduSink, CRC_FAIL_PORT, CRC_OK_PORT, PDU_PORT};
pub use stats::ErrorCounter;
