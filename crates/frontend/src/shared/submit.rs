//! Form submission boundary.
//!
//! Forms talk to a `Submitter`; the site ships `SimulatedSubmitter`, which
//! only waits. A real backend client can replace it without touching the
//! form components.

use async_trait::async_trait;
use contracts::shared::error::SubmitError;
use contracts::usecases::common::{Submission, SubmitReceipt};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;

#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, data: Submission) -> Result<SubmitReceipt, SubmitError>;
}

/// Accepts every valid submission after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, data: Submission) -> Result<SubmitReceipt, SubmitError> {
        data.validate()?;
        log::info!("Simulating submission: {:?}", data);
        TimeoutFuture::new(self.delay_ms).await;
        Ok(SubmitReceipt {
            message: data.success_message().to_string(),
        })
    }
}

/// Context wrapper so forms can look the submitter up.
#[derive(Clone)]
pub struct SubmitterContext(pub Arc<dyn Submitter + Send + Sync>);

pub fn provide_submitter(submitter: impl Submitter + Send + Sync + 'static) {
    provide_context(SubmitterContext(Arc::new(submitter)));
}

pub fn use_submitter() -> Arc<dyn Submitter + Send + Sync> {
    use_context::<SubmitterContext>()
        .expect("Submitter not provided in context (provide it in app root)")
        .0
}
