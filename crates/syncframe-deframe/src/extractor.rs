use bytes::{Bytes, BytesMut};
use tracing::{debug, trace, warn};

use syncframe_bits::{bits_to_bytes, bits_to_u16_msb};

use crate::access::AccessCode;
use crate::marker::{MarkerKind, MarkerSource};
use crate::sink::PduSink;

/// Access-code window length in bits.
pub const ACCESS_CODE_BITS: usize = AccessCode::BITS;

/// Length field: a 16-bit byte count sent twice, back to back.
pub const LENGTH_FIELD_BITS: usize = 32;

/// The phase the extractor is in between calls.
///
/// Exactly one state is active at a time; the accumulation buffer belongs
/// to the active state and is cleared on every transition out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Scanning for the next frame-start marker.
    Searching,
    /// Accumulating the 64-bit access-code window for verification.
    ///
    /// Marker-based synchronization enters `Length` directly, so this state
    /// is only active when an extractor resumes with a partially collected
    /// code window.
    AccessCode,
    /// Accumulating the duplicated 16-bit length field.
    Length,
    /// Accumulating the declared number of payload bits.
    Payload,
}

/// Configuration for a frame extractor.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Pattern verified in the access-code state.
    pub access_code: AccessCode,
    /// Upper bound on the declared payload size in bytes. A frame declaring
    /// more is discarded like a length mismatch. The default (`u16::MAX`)
    /// admits every encodable length.
    pub max_frame_bytes: usize,
    /// Emit a `trace!` event per length-field bit while decoding it.
    pub trace_bits: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            access_code: AccessCode::default(),
            max_frame_bytes: u16::MAX as usize,
            trace_bits: false,
        }
    }
}

/// Resumable frame extraction from a marker-tagged bit stream.
///
/// One instance per stream. The host delivers demodulated bits (one per
/// `u8`, 0 or 1) in chunks of any size; [`process`](Self::process) advances
/// the state machine as far as the chunk allows and reports exactly how many
/// bits it consumed. Parsing state survives across calls, so a frame may be
/// split at any bit boundary.
///
/// ```
/// use bytes::Bytes;
/// use syncframe_deframe::{FrameExtractor, SyncMarker};
///
/// // length field 0x0002 twice, then two payload bytes
/// let mut bits = Vec::new();
/// bits.extend_from_slice(&syncframe_bits::bytes_to_bits(&[0x00, 0x02, 0x00, 0x02]));
/// bits.extend_from_slice(&syncframe_bits::bytes_to_bits(&[0xDE, 0xAD]));
///
/// let markers = vec![SyncMarker::frame_start(0)];
/// let mut pdus: Vec<Bytes> = Vec::new();
///
/// let mut extractor = FrameExtractor::new();
/// let consumed = extractor.process(&bits, &markers, &mut pdus);
///
/// assert_eq!(consumed, bits.len());
/// assert_eq!(pdus, vec![Bytes::from_static(&[0xDE, 0xAD])]);
/// ```
#[derive(Debug)]
pub struct FrameExtractor {
    state: ParserState,
    buffer: BytesMut,
    expected_bits: usize,
    access_code_bits: [u8; ACCESS_CODE_BITS],
    bits_read: u64,
    config: ExtractorConfig,
}

impl FrameExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor with explicit configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            state: ParserState::Searching,
            buffer: BytesMut::new(),
            expected_bits: 0,
            access_code_bits: config.access_code.bit_pattern(),
            bits_read: 0,
            config,
        }
    }

    /// Current parser state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Absolute number of bits consumed since construction.
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Current extractor configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Consume as much of `chunk` as the current state permits.
    ///
    /// `markers` is queried for the chunk's absolute bit range; only
    /// frame-start markers at or beyond the in-chunk cursor are honored.
    /// Completed payloads are handed to `sink` in input order.
    ///
    /// Returns the number of bits consumed from this chunk — never more
    /// than `chunk.len()`, and never re-reporting bits consumed by an
    /// earlier call. The host must not re-deliver consumed bits.
    pub fn process<M, S>(&mut self, chunk: &[u8], markers: &M, sink: &mut S) -> usize
    where
        M: MarkerSource + ?Sized,
        S: PduSink + ?Sized,
    {
        let ninput = chunk.len();
        let mut consumed = 0usize;
        trace!(bits = ninput, state = ?self.state, "chunk received");

        while consumed < ninput {
            match self.state {
                ParserState::Searching => {
                    let start = self.bits_read + consumed as u64;
                    let end = self.bits_read + ninput as u64;
                    let hit = markers
                        .markers_in_range(start, end)
                        .into_iter()
                        .filter(|m| m.kind == MarkerKind::FrameStart)
                        .filter_map(|m| {
                            let rel = m.offset.checked_sub(self.bits_read)? as usize;
                            (rel >= consumed && rel < ninput).then_some(rel)
                        })
                        .next();

                    match hit {
                        Some(rel) => {
                            // Bits before the marker are inter-frame noise.
                            consumed = rel;
                            self.buffer.clear();
                            // The upstream tagger only marks a position after
                            // matching the access code itself; the length
                            // field starts at the marker.
                            self.state = ParserState::Length;
                            debug!(pos = rel, "frame-start marker found");
                        }
                        None => {
                            trace!(
                                discarded = ninput - consumed,
                                "no frame-start marker, discarding remainder"
                            );
                            consumed = ninput;
                        }
                    }
                }

                ParserState::AccessCode => {
                    let take = (ACCESS_CODE_BITS - self.buffer.len()).min(ninput - consumed);
                    self.buffer.extend_from_slice(&chunk[consumed..consumed + take]);
                    consumed += take;

                    if self.buffer.len() == ACCESS_CODE_BITS {
                        let matched = self
                            .buffer
                            .iter()
                            .map(|b| b & 1)
                            .eq(self.access_code_bits.iter().copied());
                        if matched {
                            debug!("access code verified");
                            self.state = ParserState::Length;
                        } else {
                            debug!("access code mismatch, resynchronizing");
                            self.state = ParserState::Searching;
                        }
                        self.buffer.clear();
                    }
                }

                ParserState::Length => {
                    let take = (LENGTH_FIELD_BITS - self.buffer.len()).min(ninput - consumed);
                    self.buffer.extend_from_slice(&chunk[consumed..consumed + take]);
                    consumed += take;

                    if self.buffer.len() == LENGTH_FIELD_BITS {
                        if self.config.trace_bits {
                            for (i, bit) in self.buffer.iter().enumerate() {
                                trace!(index = i, bit = bit & 1, "length field bit");
                            }
                        }
                        let length1 = bits_to_u16_msb(&self.buffer[..16]);
                        let length2 = bits_to_u16_msb(&self.buffer[16..]);

                        if length1 != length2 {
                            debug!(length1, length2, "length copies disagree, resynchronizing");
                            self.state = ParserState::Searching;
                        } else if length1 as usize > self.config.max_frame_bytes {
                            warn!(
                                bytes = length1,
                                max = self.config.max_frame_bytes,
                                "declared length over cap, resynchronizing"
                            );
                            self.state = ParserState::Searching;
                        } else {
                            self.expected_bits = length1 as usize * 8;
                            debug!(bytes = length1, "length field verified");
                            self.state = ParserState::Payload;
                        }
                        self.buffer.clear();
                    }
                }

                ParserState::Payload => {
                    let take = (self.expected_bits - self.buffer.len()).min(ninput - consumed);
                    self.buffer.extend_from_slice(&chunk[consumed..consumed + take]);
                    consumed += take;

                    if self.buffer.len() == self.expected_bits {
                        let payload = Bytes::from(bits_to_bytes(&self.buffer));
                        debug!(bytes = payload.len(), "payload complete, publishing");
                        sink.publish(payload);
                        self.expected_bits = 0;
                        self.state = ParserState::Searching;
                        self.buffer.clear();
                    }
                }
            }
        }

        self.bits_read += consumed as u64;
        trace!(consumed, state = ?self.state, "chunk processed");
        consumed
    }
}

impl Default for FrameExtractor {
    fn default() -> Self {
        Self::new()
    }
}
