//! Progress reporting for panel runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use panel_application::ProgressNotifier;
use panel_domain::Phase;
use std::sync::Mutex;

/// Reports progress during a panel run with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_label(phase: Phase) -> String {
        match phase {
            Phase::Consultation => format!("Phase 1: {}", phase.display_name()),
            Phase::Synthesis => format!("Phase 2: {}", phase.display_name()),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_label(phase));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: Phase, task_name: &str, success: bool) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), task_name)
            } else {
                format!("{} {}", "x".red(), task_name)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: Phase) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }

    fn on_placeholder(&self, task_name: &str) {
        let _ = self.multi.println(format!(
            "  {} {} report missing, using placeholder",
            "!".yellow(),
            task_name
        ));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: Phase, total_tasks: usize) {
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_label(phase).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: Phase, task_name: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), task_name);
        } else {
            println!("  {} {} (failed)", "x".red(), task_name);
        }
    }

    fn on_phase_complete(&self, _phase: Phase) {
        println!();
    }
}
