//! Progress reporting for wall-bounce execution

use bounce_application::{ProgressNotifier, SequencePhase};
use bounce_domain::Model;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports chain progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_sequence_start(&self, total_steps: usize) {
        let pb = ProgressBar::new(total_steps as u64);
        pb.set_style(Self::style());
        pb.set_prefix("Wall-Bounce");
        pb.set_message("Starting...");
        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_step_start(&self, _step: usize, model: &Model) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.set_message(format!("querying {}", model));
        }
    }

    fn on_step_complete(&self, _step: usize, model: &Model, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), model)
            } else {
                format!("{} {}", "x".red(), model)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase(&self, phase: SequencePhase) {
        if phase == SequencePhase::Aggregating {
            if let Some(pb) = self.bar.lock().unwrap().take() {
                pb.finish_with_message(format!("{}", "chain complete".green()));
            }
        }
    }
}
