//! Progress display for a single growth run

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static GROWTH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks body, frontier, and unexplored pixel counts while the image grows
pub struct GrowthProgress {
    bar: ProgressBar,
    total: usize,
}

impl GrowthProgress {
    /// Create a bar sized to the total pixel count
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(GROWTH_STYLE.clone());
        Self { bar, total }
    }

    /// Report the filled body size and the current frontier size
    pub fn update(&self, body: usize, frontier: usize) {
        self.bar.set_position(body as u64);
        let unexplored = self.total.saturating_sub(body + frontier);
        self.bar
            .set_message(format!("frontier: {frontier}  unexplored: {unexplored}"));
    }

    /// Finish the bar and leave a completion message
    pub fn finish(&self) {
        self.bar.set_position(self.total as u64);
        self.bar.finish_with_message("done");
    }
}
