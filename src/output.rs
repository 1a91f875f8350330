use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Line-oriented output sink for everything the player sees. Gameplay text
/// goes through here; `tracing` logs go elsewhere. Keeping the sink behind a
/// handle lets tests capture a session verbatim.
pub struct Output {
    w: Box<dyn Write + Send>,
}

impl Output {
    pub fn new(w: Box<dyn Write + Send>) -> Self {
        Self { w }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// One line of game text, newline-terminated.
    pub fn line(&mut self, s: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.w, "{}", s.as_ref())
    }

    pub fn lines<I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for l in lines {
            self.line(l)?;
        }
        Ok(())
    }

    /// A prompt that expects input on the same stream pace; flushed so it is
    /// visible before the blocking read.
    pub fn prompt(&mut self, s: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.w, "{}", s.as_ref())?;
        self.w.flush()
    }
}

/// A cloneable in-memory sink. Tests hand one clone to `Output` and keep the
/// other to read the transcript back.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuf(Arc<Mutex<Vec<u8>>>);

impl CaptureBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let buf = self.0.lock().expect("capture buffer poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for CaptureBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
