//! Batch progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Examples: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of examples
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    retries: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar shown yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            retries: 0,
        }
    }

    /// Show a bar sized for `example_count` examples
    pub fn initialize(&mut self, example_count: usize) {
        let bar = ProgressBar::new(example_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Record a failed attempt that will be retried
    pub fn record_retry(&mut self) {
        self.retries += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("({} retried)", self.retries));
        }
    }

    /// Advance the bar by one finished example
    pub fn complete_example(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Failed attempts recorded so far
    pub const fn retries(&self) -> usize {
        self.retries
    }

    /// Position of the bar, or zero when none is shown
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Close the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All examples generated");
        }
    }
}
