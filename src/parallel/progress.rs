//! Throttled progress bar for the pair engine
//!
//! Renders to stderr so the data stream stays clean. Redraws are bounded to
//! roughly 100,000 over a whole run via a computed stride, whatever the
//! total pair count is.

use is_terminal::IsTerminal;
use std::io::Write;
use std::time::Instant;

const DEFAULT_BAR_WIDTH: usize = 40;

/// When to draw the progress bar.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum ProgressMode {
    /// Draw only when stderr is a terminal
    #[default]
    Auto,
    /// Always draw
    Always,
    /// Never draw (the counter still advances)
    Never,
}

/// Monotonic counter over the total pair count with a throttled textual
/// rendering. Increment and render happen together, under the same lock as
/// the result write, so the display never runs ahead of the output file.
#[derive(Debug)]
pub struct ProgressBar {
    current: u64,
    total: u64,
    stride: u64,
    started: Instant,
    enabled: bool,
    bar_width: usize,
    last_line_len: usize,
    finished: bool,
}

impl ProgressBar {
    pub fn new(total: u64, mode: ProgressMode) -> Self {
        let enabled = match mode {
            ProgressMode::Auto => std::io::stderr().is_terminal(),
            ProgressMode::Always => true,
            ProgressMode::Never => false,
        };

        // The bar plus percentage and ETA need ~30 columns of margin
        let bar_width = match terminal_size::terminal_size() {
            Some((terminal_size::Width(cols), _)) => {
                DEFAULT_BAR_WIDTH.min((cols as usize).saturating_sub(30).max(10))
            }
            None => DEFAULT_BAR_WIDTH,
        };

        let mut bar = Self {
            current: 0,
            total,
            stride: (total / 100_000).max(1),
            started: Instant::now(),
            enabled,
            bar_width,
            last_line_len: 0,
            finished: total == 0,
        };
        if bar.enabled && !bar.finished {
            bar.render();
        }
        bar
    }

    /// Advance by one completed pair. Never counts past the total; the
    /// finished state renders exactly once.
    pub fn inc(&mut self) {
        if self.current >= self.total {
            return;
        }
        self.current += 1;

        if self.current == self.total {
            self.finished = true;
            if self.enabled {
                self.render();
            }
        } else if self.enabled && self.current % self.stride == 0 {
            self.render();
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&mut self) {
        let pct = (self.current as f64) * 100.0 / (self.total as f64);
        let filled = (self.current * self.bar_width as u64 / self.total) as usize;

        let mut line = format!(" {:5.1} [", pct);
        for _ in 0..filled {
            line.push('=');
        }

        if self.current < self.total {
            line.push('>');
            for _ in filled + 1..self.bar_width {
                line.push(' ');
            }
            let elapsed = self.started.elapsed().as_secs_f64();
            let speed = self.current as f64 / elapsed.max(f64::EPSILON);
            let eta = (self.total - self.current) as f64 / speed.max(f64::EPSILON);
            line.push_str(&format!("] - ETA: {:.0} s", eta));

            // Pad over leftovers from a longer previous line
            let pad = self.last_line_len.saturating_sub(line.len());
            self.last_line_len = line.len();
            let mut stderr = std::io::stderr().lock();
            let _ = write!(stderr, "\r{}{}", line, " ".repeat(pad));
            let _ = stderr.flush();
        } else {
            line.push(']');
            let pad = self.last_line_len.saturating_sub(line.len());
            self.last_line_len = 0;
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "\r{}{}", line, " ".repeat(pad));
            let _ = stderr.flush();
        }
    }
}
