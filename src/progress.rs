use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{
    PROGRESS_BAR_TEMPLATE, SPINNER_FRAMES, SPINNER_TEMPLATE, TICK_INTERVAL,
};
use crate::utils::string::pluralize;

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// A reporter only makes sense when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn loading_input(&mut self, source: &str) {
        let _ = self.term.clear_line();
        eprintln!("{} Loading {}...", style("📥").cyan(), style(source).dim());
        let spinner = self.create_spinner("Validating components and edges...");
        self.current_bar = Some(spinner);
    }

    pub fn finish_loading(&mut self, components: usize, edges: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Loaded {} {} and {} {}",
            style("✓").green(),
            style(components).yellow().bold(),
            pluralize("component", components),
            style(edges).yellow().bold(),
            pluralize("edge", edges)
        );
    }

    /// Bar ticked once per non-trivial SCC as it is analysed; the planner
    /// sets its length once the SCCs are known
    pub fn start_planning(&mut self) -> ProgressBar {
        eprintln!(
            "\n{} {} Enumerating cycles...",
            style(self.next_frame()).yellow(),
            style("🔄").yellow()
        );
        let pb = self.create_progress_bar(0, "Analysing SCCs");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_planning(&mut self, cycles_found: usize, plans: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }

        if cycles_found == 0 {
            eprintln!(
                "{} No cycles detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} {}, {} break {}",
                style("⚠").yellow().bold(),
                style(cycles_found).red().bold(),
                pluralize("cycle", cycles_found),
                style(plans).cyan().bold(),
                pluralize("plan", plans)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cycle() {
        let reporter = ProgressReporter::new();
        let first = reporter.next_frame();
        for _ in 1..SPINNER_FRAMES.len() {
            reporter.next_frame();
        }
        assert_eq!(reporter.next_frame(), first);
    }

    #[test]
    fn test_planning_bar_length() {
        let mut reporter = ProgressReporter::new();
        let pb = reporter.start_planning();
        pb.set_length(3);
        assert_eq!(pb.length(), Some(3));
        reporter.finish_planning(0, 0);
        assert!(reporter.current_bar.is_none());
    }
}
