//! Task executor - runs the specialist batch concurrently
//!
//! Every submitted task yields exactly one [`TaskOutcome`], delivered over a
//! single channel in completion order. Errors, empty replies, deadline
//! overruns, cancellation and panics all become failure outcomes tagged with
//! the task's name.

use super::RunPanelError;
use crate::config::ExecutionParams;
use crate::ports::llm_gateway::GatewayError;
use crate::ports::opinion_source::OpinionSource;
use crate::use_cases::shared::guarded_call;
use futures::Stream;
use panel_domain::{TaskOutcome, TaskSpec, validate_unique};
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Outcomes of one batch, in completion order
///
/// Yields at most one outcome per submitted task and ends once every task
/// has settled.
pub struct OutcomeStream {
    receiver: mpsc::Receiver<TaskOutcome>,
    expected: Vec<String>,
}

impl OutcomeStream {
    #[cfg(test)]
    pub(crate) fn from_channel(receiver: mpsc::Receiver<TaskOutcome>, expected: Vec<String>) -> Self {
        Self { receiver, expected }
    }

    /// Names of the submitted tasks, in submission order
    pub fn expected(&self) -> &[String] {
        &self.expected
    }
}

impl Stream for OutcomeStream {
    type Item = TaskOutcome;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<TaskOutcome>> {
        self.receiver.poll_recv(cx)
    }
}

/// Runs specialist tasks in parallel against an [`OpinionSource`]
pub struct TaskExecutor<S: OpinionSource + 'static> {
    source: Arc<S>,
    task_timeout: Option<Duration>,
    max_concurrency: Option<usize>,
    cancel: CancellationToken,
}

impl<S: OpinionSource + 'static> TaskExecutor<S> {
    pub fn new(source: Arc<S>, params: &ExecutionParams, cancel: CancellationToken) -> Self {
        Self {
            source,
            task_timeout: params.task_timeout,
            max_concurrency: params.max_concurrency,
            cancel,
        }
    }

    /// Submit every task and return the stream of their outcomes.
    ///
    /// Rejects an empty batch or duplicate names before anything is spawned.
    /// Must be called from within a tokio runtime.
    pub fn run_all(&self, tasks: Vec<TaskSpec>) -> Result<OutcomeStream, RunPanelError> {
        validate_unique(&tasks)?;

        let expected: Vec<String> = tasks.iter().map(|t| t.name().to_string()).collect();
        let (tx, rx) = mpsc::channel(tasks.len());
        let semaphore = self.max_concurrency.map(|n| Arc::new(Semaphore::new(n)));

        info!(
            "Submitting {} specialist tasks (concurrency limit: {})",
            tasks.len(),
            self.max_concurrency
                .map_or_else(|| "none".to_string(), |n| n.to_string())
        );

        let mut join_set = JoinSet::new();
        let mut names = HashMap::new();

        for task in tasks {
            let source = Arc::clone(&self.source);
            let semaphore = semaphore.clone();
            let cancel = self.cancel.clone();
            let deadline = self.task_timeout;
            let name = task.name().to_string();

            let handle = join_set.spawn(async move {
                Self::run_one(source, task, deadline, semaphore, cancel).await
            });
            names.insert(handle.id(), name);
        }

        // Single driver: the only place outcomes enter the channel.
        tokio::spawn(async move {
            while let Some(joined) = join_set.join_next_with_id().await {
                let outcome = match joined {
                    Ok((_, outcome)) => outcome,
                    Err(e) => {
                        let name = names.get(&e.id()).cloned().unwrap_or_default();
                        debug!("Specialist {} did not finish: {}", name, e);
                        TaskOutcome::failed(name, format!("task aborted: {}", e))
                    }
                };
                if tx.send(outcome).await.is_err() {
                    debug!("Outcome receiver dropped; aborting remaining specialist tasks");
                    join_set.abort_all();
                    break;
                }
            }
        });

        Ok(OutcomeStream {
            receiver: rx,
            expected,
        })
    }

    async fn run_one(
        source: Arc<S>,
        task: TaskSpec,
        deadline: Option<Duration>,
        semaphore: Option<Arc<Semaphore>>,
        cancel: CancellationToken,
    ) -> TaskOutcome {
        let name = task.name().to_string();

        let _permit = match semaphore {
            Some(semaphore) => tokio::select! {
                _ = cancel.cancelled() => {
                    return TaskOutcome::failed(name, GatewayError::Cancelled.to_string());
                }
                permit = semaphore.acquire_owned() => match permit {
                    Ok(permit) => Some(permit),
                    Err(_) => return TaskOutcome::failed(name, "executor closed"),
                },
            },
            None => None,
        };

        debug!("Specialist {} started", name);
        match guarded_call(source.opinion(&task), deadline, &cancel).await {
            Ok(text) => {
                let outcome = TaskOutcome::from_text(name, text);
                if outcome.is_success() {
                    info!("Specialist {} responded successfully", outcome.task_name);
                } else {
                    debug!("Specialist {} returned an empty report", outcome.task_name);
                }
                outcome
            }
            Err(e) => {
                debug!("Specialist {} failed: {}", name, e);
                TaskOutcome::failed(name, e.to_string())
            }
        }
    }
}
