//! Shared benchmark support.

use sigfmt_core::writebuf::RawWrite;

/// Sink that accepts everything and keeps nothing.
pub struct NullSink;

impl RawWrite for NullSink {
    fn write_all(&mut self, buf: &[u8]) -> usize {
        buf.len()
    }
}
