//! Result collector - the single owner of the result set
//!
//! Drains an [`OutcomeStream`] and stores one entry per submitted task,
//! substituting the deterministic placeholder for failed or empty outcomes.

use super::executor::OutcomeStream;
use crate::ports::progress::ProgressNotifier;
use futures::StreamExt;
use panel_domain::{OpinionResult, Phase, ResultSet};
use std::collections::HashSet;
use tracing::{debug, warn};

pub struct ResultCollector<'a> {
    progress: &'a dyn ProgressNotifier,
}

impl<'a> ResultCollector<'a> {
    pub fn new(progress: &'a dyn ProgressNotifier) -> Self {
        Self { progress }
    }

    /// Block until every submitted task has reported (or the stream ends).
    ///
    /// A name whose outcome never arrives stays absent, which the gate then
    /// reports as missing. Outcomes for unknown or already-seen names are
    /// ignored.
    pub async fn collect(&self, mut outcomes: OutcomeStream) -> ResultSet {
        let expected: HashSet<String> = outcomes.expected().iter().cloned().collect();
        let mut seen = HashSet::with_capacity(expected.len());
        let mut results = ResultSet::new();

        while seen.len() < expected.len() {
            let Some(outcome) = outcomes.next().await else {
                warn!(
                    "Outcome stream ended after {} of {} specialists",
                    seen.len(),
                    expected.len()
                );
                break;
            };

            let name = outcome.task_name.clone();
            if !expected.contains(&name) {
                warn!("Ignoring outcome for unsubmitted task '{}'", name);
                continue;
            }
            if !seen.insert(name.clone()) {
                warn!("Ignoring second outcome for task '{}'", name);
                continue;
            }

            match outcome.opinion() {
                Some(text) => {
                    debug!("Collected report from {}", name);
                    results.insert_opinion(name.clone(), text);
                    self.progress
                        .on_task_complete(Phase::Consultation, &name, true);
                }
                None => {
                    let reason = match &outcome.result {
                        OpinionResult::Failed(reason) => reason.as_str(),
                        OpinionResult::Opinion(_) => "empty response",
                    };
                    warn!(
                        "{} agent returned no report ({}); substituting placeholder",
                        name, reason
                    );
                    results.insert_placeholder(name.clone());
                    self.progress.on_placeholder(&name);
                    self.progress
                        .on_task_complete(Phase::Consultation, &name, false);
                }
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExecutionParams;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::opinion_source::OpinionSource;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::run_panel::executor::TaskExecutor;
    use async_trait::async_trait;
    use panel_domain::{TaskOutcome, TaskSpec};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio_util::sync::CancellationToken;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Returns the task name as the opinion, except for names in `empty`.
    struct EchoSource {
        empty: Vec<&'static str>,
    }

    #[async_trait]
    impl OpinionSource for EchoSource {
        async fn opinion(&self, task: &TaskSpec) -> Result<String, GatewayError> {
            if self.empty.iter().any(|n| *n == task.name()) {
                Ok(String::new())
            } else {
                Ok(format!("{} says hello", task.name()))
            }
        }

        async fn synthesize(&self, _inputs: &ResultSet) -> Result<String, GatewayError> {
            unreachable!()
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        placeholders: Mutex<Vec<String>>,
        completed: Mutex<Vec<(String, bool)>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_phase_start(&self, _phase: Phase, _total_tasks: usize) {}
        fn on_task_complete(&self, _phase: Phase, task_name: &str, success: bool) {
            self.completed
                .lock()
                .unwrap()
                .push((task_name.to_string(), success));
        }
        fn on_phase_complete(&self, _phase: Phase) {}
        fn on_placeholder(&self, task_name: &str) {
            self.placeholders.lock().unwrap().push(task_name.to_string());
        }
    }

    fn stream_for(names: &[&str], empty: Vec<&'static str>) -> OutcomeStream {
        let tasks = names
            .iter()
            .map(|n| TaskSpec::new(*n, "doc").unwrap())
            .collect();
        TaskExecutor::new(
            Arc::new(EchoSource { empty }),
            &ExecutionParams::default(),
            CancellationToken::new(),
        )
        .run_all(tasks)
        .unwrap()
    }

    #[tokio::test]
    async fn test_every_name_present_for_any_batch_size() {
        for n in 1..=8 {
            let names: Vec<String> = (0..n).map(|i| format!("Specialist{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let results = ResultCollector::new(&NoProgress)
                .collect(stream_for(&refs, vec![]))
                .await;

            assert_eq!(results.len(), n);
            for name in &names {
                assert!(results.contains(name));
            }
        }
    }

    #[tokio::test]
    async fn test_empty_result_gets_placeholder() {
        let progress = RecordingProgress::default();
        let results = ResultCollector::new(&progress)
            .collect(stream_for(
                &["Cardiologist", "Psychologist", "Pulmonologist"],
                vec!["Psychologist"],
            ))
            .await;

        assert_eq!(results.len(), 3);
        assert_eq!(
            results.get("Psychologist"),
            Some("Error: Psychologist report could not be generated.")
        );
        assert!(results.is_placeholder("Psychologist"));
        assert_eq!(results.get("Cardiologist"), Some("Cardiologist says hello"));
        assert_eq!(
            *progress.placeholders.lock().unwrap(),
            vec!["Psychologist".to_string()]
        );
        assert_eq!(progress.completed.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_stray_duplicate_and_missing_outcomes() {
        let (tx, rx) = tokio::sync::mpsc::channel(8);
        let stream = OutcomeStream::from_channel(rx, vec!["A".to_string(), "B".to_string()]);

        tx.send(TaskOutcome::from_text("Stranger", "not submitted")).await.unwrap();
        tx.send(TaskOutcome::from_text("A", "first")).await.unwrap();
        tx.send(TaskOutcome::from_text("A", "second")).await.unwrap();
        drop(tx);

        let results = ResultCollector::new(&NoProgress).collect(stream).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results.get("A"), Some("first"));
        assert!(!results.contains("B"));
        assert!(!results.contains("Stranger"));
    }

    #[tokio::test]
    async fn test_all_failed_still_yields_all_keys() {
        let results = ResultCollector::new(&NoProgress)
            .collect(stream_for(&["A", "B"], vec!["A", "B"]))
            .await;
        assert_eq!(results.len(), 2);
        assert_eq!(results.placeholder_names().count(), 2);
    }

    /// Counts WARN events seen by the current thread's subscriber.
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[tokio::test]
    async fn test_each_failed_specialist_warns_once() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber =
            tracing_subscriber::registry().with(WarnCounter(Arc::clone(&warnings)));
        let _guard = tracing::subscriber::set_default(subscriber);

        let results = ResultCollector::new(&NoProgress)
            .collect(stream_for(
                &["Cardiologist", "Psychologist", "Pulmonologist"],
                vec!["Psychologist", "Pulmonologist"],
            ))
            .await;

        assert_eq!(results.placeholder_names().count(), 2);
        assert_eq!(warnings.load(Ordering::SeqCst), 2);
    }
}
