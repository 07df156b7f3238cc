use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// Spinner redraw interval
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it never mixes with the rendered dashboard on stdout.
/// Uses an indicatif spinner while a request is in flight.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report_waiting(&self, message: &str) {
        self.clear_spinner();

        let spinner = ProgressBar::new_spinner();
        // The template is a literal; fall back to the default style if it is ever rejected
        if let Ok(style) = ProgressStyle::with_template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(TICK_INTERVAL);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        if !message.is_empty() {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report_waiting("Loading…");
        assert!(reporter.spinner.borrow().is_some());
        reporter.report_completion("");
        assert!(reporter.spinner.borrow().is_none());
    }

    #[test]
    fn test_waiting_twice_replaces_spinner() {
        let reporter = StderrProgressReporter::default();
        reporter.report_waiting("first");
        reporter.report_waiting("second");
        assert_eq!(
            reporter.spinner.borrow().as_ref().map(|s| s.message()),
            Some("second".to_string())
        );
        reporter.report_completion("done");
    }
}
