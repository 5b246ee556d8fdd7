use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Spinner showing the current page and running quote count.
pub fn page_spinner() -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} [{elapsed_precise}] {msg}")?);
    Ok(pb)
}

pub fn start(pb: &ProgressBar) {
    pb.enable_steady_tick(Duration::from_millis(120));
}

/// Log sink that hides the spinner while a line is written, so log output
/// and spinner frames never share a terminal line.
pub struct ProgressWriter<W> {
    pb: ProgressBar,
    inner: W,
}

impl<W> ProgressWriter<W> {
    pub fn new(pb: ProgressBar, inner: W) -> Self {
        Self { pb, inner }
    }
}

impl<W: Write> Write for ProgressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.pb.suspend(|| inner.write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        let inner = &mut self.inner;
        self.pb.suspend(|| inner.write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
