//! PDU output interface and well-known port names.
//!
//! Emission is fire-and-forget: a complete, exact-length payload is
//! published to one fixed logical port, with no acknowledgment and no
//! backpressure.

use bytes::Bytes;

/// Port carrying extracted payload PDUs.
pub const PDU_PORT: &str = "pdu";

/// Port carrying checksum-pass events from the downstream validator.
pub const CRC_OK_PORT: &str = "ok";

/// Port carrying checksum-fail events from the downstream validator.
pub const CRC_FAIL_PORT: &str = "fail";

/// Consumer of extracted payload PDUs.
///
/// The extractor hands each completed payload to the sink and retains
/// nothing. A sink may be called several times within one `process` call
/// when a chunk carries more than one complete frame.
pub trait PduSink {
    fn publish(&mut self, payload: Bytes);
}

/// Collects published PDUs in order.
impl PduSink for Vec<Bytes> {
    fn publish(&mut self, payload: Bytes) {
        self.push(payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Bytes> = Vec::new();
        sink.publish(Bytes::from_static(b"one"));
        sink.publish(Bytes::from_static(b"two"));
        assert_eq!(
            sink,
            vec![Bytes::from_static(b"one"), Bytes::from_static(b"two")]
        );
    }

    #[test]
    fn port_names_are_distinct() {
        assert_ne!(PDU_PORT, CRC_OK_PORT);
        assert_ne!(CRC_OK_PORT, CRC_FAIL_PORT);
    }
}
