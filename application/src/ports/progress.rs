//! Progress notification port
//!
//! Defines the interface for reporting progress during a panel run.

use panel_domain::Phase;

/// Callback for progress updates during a panel run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: Phase, total_tasks: usize);

    /// Called when a task completes within a phase
    fn on_task_complete(&self, phase: Phase, task_name: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: Phase);

    /// Called when the collector substitutes a placeholder for a task
    fn on_placeholder(&self, _task_name: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: Phase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: Phase, _task_name: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: Phase) {}
}
