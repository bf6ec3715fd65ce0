//! Publish Report use case
//!
//! Turns the run's verdict into the single [`FinalReport`] and hands it to the
//! configured [`ReportSink`].

use crate::ports::report_sink::{PublishError, ReportSink};
use panel_domain::{FinalReport, PanelVerdict};
use tracing::{error, info};

pub struct ReportPublisher<'a> {
    sink: &'a dyn ReportSink,
}

impl<'a> ReportPublisher<'a> {
    pub fn new(sink: &'a dyn ReportSink) -> Self {
        Self { sink }
    }

    pub async fn publish(&self, verdict: &PanelVerdict) -> Result<FinalReport, PublishError> {
        let report = FinalReport::from(verdict);

        match verdict {
            PanelVerdict::Synthesized { .. } => {}
            PanelVerdict::Blocked { missing } => error!(
                "Missing reports for the following agents: {}. Cannot proceed with synthesis.",
                missing.join(", ")
            ),
            PanelVerdict::SynthesisFailed { reason } => {
                error!("Synthesis failed to generate a final diagnosis: {}", reason)
            }
        }

        self.sink.write(&report).await?;
        info!("Final diagnosis has been saved to {}", self.sink.destination());
        Ok(report)
    }
}
