use horologe_ports::{DisplayResult, Surface};
use std::io::Write;
use std::sync::Mutex;

/// Display surface that rewrites a single terminal line in place
///
/// Each write emits a carriage return, the new text, and a flush, so the
/// line is overwritten rather than scrolled. The timestamp format is
/// fixed-width, so no trailing clear is needed.
pub struct TerminalSurface {
    id: String,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalSurface {
    /// Surface backed by standard output
    pub fn stdout(id: impl Into<String>) -> Self {
        Self::with_writer(id, Box::new(std::io::stdout()))
    }

    /// Surface backed by an arbitrary writer
    pub fn with_writer(id: impl Into<String>, out: Box<dyn Write + Send>) -> Self {
        Self {
            id: id.into(),
            out: Mutex::new(out),
        }
    }
}

impl Surface for TerminalSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_text(&self, text: &str) -> DisplayResult<()> {
        let mut out = self.out.lock().expect("writer lock poisoned");
        write!(out, "\r{}", text)?;
        out.flush()?;
        Ok(())
    }
}
