//! Out-of-band synchronization markers.
//!
//! The upstream clock-recovery stage annotates the bit stream with markers
//! at absolute bit positions. The extractor only interprets
//! [`MarkerKind::FrameStart`]; everything else passes through unnoticed.

/// What a marker annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Candidate frame boundary emitted after upstream synchronization.
    FrameStart,
    /// Any other upstream annotation; ignored by the extractor.
    Other,
}

/// An annotation at an absolute bit position in the stream.
///
/// `offset` counts bits from the moment the extractor was created; the
/// extractor translates it to a chunk-relative position itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncMarker {
    pub offset: u64,
    pub kind: MarkerKind,
}

impl SyncMarker {
    pub fn frame_start(offset: u64) -> Self {
        Self {
            offset,
            kind: MarkerKind::FrameStart,
        }
    }
}

/// Source of markers for a range of absolute bit positions.
///
/// Decouples the extractor from how the host stores or indexes markers.
/// `start..end` is half-open; implementations must only return markers
/// whose offset falls inside it.
pub trait MarkerSource {
    fn markers_in_range(&self, start: u64, end: u64) -> Vec<SyncMarker>;
}

impl MarkerSource for [SyncMarker] {
    fn markers_in_range(&self, start: u64, end: u64) -> Vec<SyncMarker> {
        self.iter()
            .filter(|m| m.offset >= start && m.offset < end)
            .copied()
            .collect()
    }
}

impl MarkerSource for Vec<SyncMarker> {
    fn markers_in_range(&self, start: u64, end: u64) -> Vec<SyncMarker> {
        self.as_slice().markers_in_range(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_half_open() {
        let markers = vec![
            SyncMarker::frame_start(10),
            SyncMarker::frame_start(20),
            SyncMarker::frame_start(30),
        ];

        let hits = markers.markers_in_range(10, 30);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].offset, 10);
        assert_eq!(hits[1].offset, 20);
    }

    #[test]
    fn empty_range_yields_nothing() {
        let markers = vec![SyncMarker::frame_start(5)];
        assert!(markers.markers_in_range(5, 5).is_empty());
    }

    #[test]
    fn preserves_marker_kind() {
        let markers = vec![SyncMarker {
            offset: 3,
            kind: MarkerKind::Other,
        }];
        let hits = markers.markers_in_range(0, 8);
        assert_eq!(hits[0].kind, MarkerKind::Other);
    }
}
