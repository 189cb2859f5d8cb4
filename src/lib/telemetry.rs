//! Logging setup for the browser. Events are formatted by `tracing-subscriber`
//! and forwarded line by line to the matching `console.*` method, so log
//! levels survive into the browser devtools filters. Never log passwords,
//! tokens, or the stored user blob.

use std::str::FromStr;
use tracing::Level;

/// Parses a configured level name, falling back to the default on garbage.
pub(crate) fn parse_level(value: &str) -> Level {
    Level::from_str(value.trim())
        .or_else(|_| Level::from_str(super::config::DEFAULT_LOG_LEVEL))
        .unwrap_or(Level::INFO)
}

/// Installs the console subscriber. Calling it twice is harmless; the second
/// install is rejected by `tracing` and ignored here.
#[cfg(target_arch = "wasm32")]
pub(crate) fn init(level: &str) {
    let level = parse_level(level);
    let installed = tracing_subscriber::fmt()
        .with_writer(console::ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%level, "console logging initialized");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub(super) struct ConsoleMakeWriter;

    /// Buffers one formatted event and hands it to the console on drop.
    pub(super) struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(line.trim_end());
            if self.level == Level::ERROR {
                web_sys::console::error_1(&line);
            } else if self.level == Level::WARN {
                web_sys::console::warn_1(&line);
            } else if self.level == Level::INFO {
                web_sys::console::info_1(&line);
            } else {
                web_sys::console::debug_1(&line);
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use tracing::Level;

    #[test]
    fn parse_level_accepts_names_in_any_case() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("trace"), Level::TRACE);
    }

    #[test]
    fn parse_level_falls_back_to_info() {
        assert_eq!(parse_level(""), Level::INFO);
        assert_eq!(parse_level("loud"), Level::INFO);
    }
}
