// Contact Submission
// The collaborator a completed contact form is handed to

use async_trait::async_trait;
use std::time::Duration;

use crate::core::ContactForm;
use crate::error::SubmitError;

/// Submission target for a completed contact form
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, payload: &ContactForm) -> Result<(), SubmitError>;
}

/// What the simulated target answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBehavior {
    Succeed,
    /// Transport failure; the user may retry
    Fail(String),
    /// The target refused the inquiry
    Reject(String),
}

/// Stand-in target: waits a fixed delay, then answers per its behavior
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    behavior: SubmitBehavior,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration, behavior: SubmitBehavior) -> Self {
        Self { delay, behavior }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000), SubmitBehavior::Succeed)
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, payload: &ContactForm) -> Result<(), SubmitError> {
        tracing::info!(
            property = %payload.property_id,
            email = %payload.email,
            "Submitting contact form (simulated)"
        );
        tokio::time::sleep(self.delay).await;

        match &self.behavior {
            SubmitBehavior::Succeed => Ok(()),
            SubmitBehavior::Fail(reason) => Err(SubmitError::Network(reason.clone())),
            SubmitBehavior::Reject(reason) => Err(SubmitError::Rejected(reason.clone())),
        }
    }
}
