//! Progress reporting

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for a drift run
pub struct StatusReporter {
    fetch_bar: ProgressBar,
    report_bar: ProgressBar,
}

impl StatusReporter {
    /// Create a new status reporter
    pub fn new() -> Self {
        let fetch_bar = ProgressBar::new_spinner();
        fetch_bar.enable_steady_tick(std::time::Duration::from_millis(120));
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            fetch_bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }

        let report_bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            report_bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }

        Self { fetch_bar, report_bar }
    }

    /// Mark start of the fetch phase.
    pub fn start_fetch(&self) {
        self.fetch_bar.set_message("Fetching provider ranges...");
    }

    /// Update the fetch phase with the provider currently being pulled.
    pub fn update_fetch(&self, provider: &str) {
        self.fetch_bar.set_message(format!("Fetching {}...", provider));
    }

    /// Mark completion of the fetch phase.
    pub fn finish_fetch(&self, categories: usize, prefixes: usize) {
        self.fetch_bar.finish_with_message(format!(
            "Fetched {} categories | {} prefixes",
            categories, prefixes
        ));
    }

    /// Mark start of the diff/persist phase.
    pub fn start_reports(&self) {
        self.report_bar.enable_steady_tick(std::time::Duration::from_millis(120));
        self.report_bar.set_message("Writing reports...".to_string());
    }

    /// Update the current persistence step.
    pub fn update_reports(&self, step: &str) {
        self.report_bar.set_message(step.to_string());
    }

    /// Mark completion of the diff/persist phase.
    pub fn finish_reports(&self, added: usize, removed: usize) {
        self.report_bar.finish_with_message(format!(
            "Reports written: {} added, {} removed",
            added, removed
        ));
    }

    /// Print a warning line above the active spinner.
    pub fn warn(&self, message: &str) {
        self.report_bar
            .println(format!("{} {}", style("WARN").yellow().bold(), message));
    }
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new()
    }
}
