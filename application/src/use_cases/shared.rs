//! Shared utilities for use cases.
//!
//! Deadline and cancellation helpers used by both the specialist batch and
//! the synthesis step.

use crate::ports::llm_gateway::GatewayError;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Await `call` under an optional deadline and a cancellation token.
///
/// Cancellation wins over a call that becomes ready in the same poll.
pub(crate) async fn guarded_call<F, T>(
    call: F,
    deadline: Option<Duration>,
    cancel: &CancellationToken,
) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    let bounded = async {
        match deadline {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => call.await,
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(GatewayError::Cancelled),
        result = bounded => result,
    }
}
