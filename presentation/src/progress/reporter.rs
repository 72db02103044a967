//! Progress reporting for console-mode debate runs

use crate::view::composer::LOADING_MESSAGE;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use simulacra_application::SessionObserver;
use simulacra_domain::SessionPhase;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on stderr while a run is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(LOADING_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn finish_spinner(&self, message: String) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ProgressReporter {
    fn on_transition(&self, _from: SessionPhase, to: SessionPhase) {
        match to {
            SessionPhase::Running => self.start_spinner(),
            SessionPhase::Succeeded => {
                self.finish_spinner(format!("{} Debate finished", "v".green()))
            }
            SessionPhase::Failed => self.finish_spinner(format!("{} Debate failed", "x".red())),
            SessionPhase::Idle => {}
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SessionObserver for SimpleProgress {
    fn on_transition(&self, _from: SessionPhase, to: SessionPhase) {
        match to {
            SessionPhase::Running => eprintln!("{} {}", "->".cyan(), LOADING_MESSAGE.bold()),
            SessionPhase::Succeeded => eprintln!("  {} Debate finished", "v".green()),
            SessionPhase::Failed => eprintln!("  {} Debate failed", "x".red()),
            SessionPhase::Idle => {}
        }
    }
}
