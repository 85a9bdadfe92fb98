//! Progress display for batch generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Caves: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the maps of a batch
///
/// A quiet tracker still counts maps but never draws.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Create a tracker for `count` maps
    pub fn new(count: usize, quiet: bool) -> Self {
        let bar = ProgressBar::new(count as u64);
        if quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Record one finished map, showing the file it was written to
    pub fn advance(&self, label: &str) {
        self.bar.set_message(label.to_owned());
        self.bar.inc(1);
    }

    /// Number of maps recorded so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar and leave a summary line
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
