//! Progress display for long-running batch commands

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_UPDATE_INTERVAL};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar that redraws in batches
///
/// Scoring one pattern takes microseconds, so the bar is only advanced every
/// [`PROGRESS_UPDATE_INTERVAL`] items to keep terminal output cheap.
pub struct ProgressManager {
    bar: ProgressBar,
    pending: usize,
}

impl ProgressManager {
    /// Create a visible progress bar on stderr for `total` items
    pub fn new(total: usize, label: &str) -> Self {
        Self::with_target(total, label, ProgressDrawTarget::stderr())
    }

    /// Create a progress bar that draws nothing
    pub fn hidden(total: usize) -> Self {
        Self::with_target(total, "", ProgressDrawTarget::hidden())
    }

    fn with_target(total: usize, label: &str, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), target);
        bar.set_style(BATCH_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar, pending: 0 }
    }

    /// Record one finished item
    pub fn tick(&mut self) {
        self.pending += 1;
        if self.pending >= PROGRESS_UPDATE_INTERVAL {
            self.flush();
        }
    }

    /// Items reported so far, including those not yet drawn
    pub fn position(&self) -> u64 {
        self.bar.position() + self.pending as u64
    }

    /// Complete the bar and remove it from the terminal
    pub fn finish(&mut self) {
        self.flush();
        self.bar.finish_and_clear();
    }

    fn flush(&mut self) {
        if self.pending > 0 {
            self.bar.inc(self.pending as u64);
            self.pending = 0;
        }
    }
}
