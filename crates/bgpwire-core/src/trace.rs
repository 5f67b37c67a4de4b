/// Observer for raw wire regions as they are decoded.
///
/// Decoders call `on_region` with a stable label and the exact bytes of
/// the region about to be decoded. The default implementation used by
/// the plain `decode_*` entry points is [`NoopTracer`], so decoding has
/// no observable side effects unless a caller injects a tracer (for
/// example a hex dumper in a CLI).
pub trait WireTracer {
    fn on_region(&mut self, label: &'static str, bytes: &[u8]);
}

/// Tracer that ignores every region.
pub struct NoopTracer;

impl WireTracer for NoopTracer {
    fn on_region(&mut self, _label: &'static str, _bytes: &[u8]) {}
}

#[cfg(test)]
mod tests {
    use super::WireTracer;

    #[derive(Default)]
    struct RecordingTracer {
        labels: Vec<&'static str>,
    }

    impl WireTracer for RecordingTracer {
        fn on_region(&mut self, label: &'static str, _bytes: &[u8]) {
            self.labels.push(label);
        }
    }

    #[test]
    fn tracer_sees_message_and_param_regions() {
        let mut buf = vec![
            0x00, 0x2d, // length
            0x01, // type
            0x04, // version
            0xfd, 0xe8, // my AS
            0x00, 0xb4, // hold time
            0x0a, 0x00, 0x00, 0x01, // BGP identifier
            0x10, // optional parameter length
        ];
        buf.extend_from_slice(&[
            0x02, 0x06, 0x41, 0x04, 0x00, 0x01, 0x00, 0x00, // capabilities
            0x08, 0x00, // multi-label marker
            0x09, 0x04, 0xde, 0xad, 0xbe, 0xef, // unknown parameter
        ]);

        let mut tracer = RecordingTracer::default();
        crate::protocols::open::decode_open_traced(&buf, &mut tracer).unwrap();
        assert_eq!(tracer.labels, vec!["open.message", "open.opt-params"]);
    }
}
