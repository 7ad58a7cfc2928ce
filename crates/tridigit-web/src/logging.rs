//! Browser log output.
//!
//! Installs a `tracing-subscriber` fmt layer whose writer hands each
//! formatted event to the developer console.

use std::io;

use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wasm_bindgen::JsValue;

/// Collects one formatted event and logs it to the console when dropped.
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    line: Vec<u8>,
}

impl ConsoleWriter {
    /// Take the buffered event without its trailing newline. `None` if
    /// nothing was written.
    fn take_line(&mut self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.line).trim_end().to_string();
        self.line.clear();
        (!line.is_empty()).then_some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            web_sys::console::log_1(&JsValue::from(line));
        }
    }
}

/// Route `tracing` events at `level` and above to the console.
///
/// A second call keeps the first subscriber.
pub fn init_logging(level: LevelFilter) {
    // The page has no wall clock through std, so events carry no timestamp.
    let layer = fmt::layer().with_writer(ConsoleWriter::default).with_ansi(false).without_time();
    if tracing_subscriber::registry().with(layer).with(level).try_init().is_err() {
        tracing::debug!("logging already initialized");
    }
}
