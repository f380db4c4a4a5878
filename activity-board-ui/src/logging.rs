//! Browser console logging for `tracing`.

use std::io;
use tracing::Level;

/// Buffers one formatted event and hands it to `console.log` on drop
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}

/// Install the console subscriber. Call once at startup.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::INFO)
        .init();
}
