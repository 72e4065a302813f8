//! Step progress display for the build plan pipeline

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks the fixed sequence of pipeline steps
pub struct StepProgress {
    bar: ProgressBar,
}

impl StepProgress {
    /// Create a progress bar for `steps` steps
    pub fn new(steps: usize) -> Self {
        let bar = ProgressBar::new(steps as u64);
        bar.set_style(STEP_STYLE.clone());
        Self { bar }
    }

    /// Progress bar that never draws, for quiet runs
    pub fn hidden(steps: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(steps as u64);
        Self { bar }
    }

    /// Announce the step that is starting
    pub fn start_step(&self, message: &str) {
        log::info!("{message}");
        self.bar.set_message(message.to_string());
    }

    /// Mark the current step as done
    pub fn complete_step(&self) {
        self.bar.inc(1);
    }

    /// Number of completed steps
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display once every step has run
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
