// Simulated Tasks
// Fixed-delay launches and form submission running on the tokio runtime

use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::submission::ContactSubmitter;
use crate::core::ContactForm;
use crate::error::SubmitError;

/// Which simulated action is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    VirtualTour,
    DroneFootage,
    ContactSubmit,
}

impl TaskKind {
    pub fn label(self) -> &'static str {
        match self {
            TaskKind::VirtualTour => "Launching virtual tour",
            TaskKind::DroneFootage => "Loading drone footage",
            TaskKind::ContactSubmit => "Sending inquiry",
        }
    }
}

/// A simulated asynchronous action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedTask {
    LaunchTour { reference: String },
    LaunchDrone { reference: String },
    SubmitContact { payload: ContactForm },
}

impl SimulatedTask {
    pub fn kind(&self) -> TaskKind {
        match self {
            SimulatedTask::LaunchTour { .. } => TaskKind::VirtualTour,
            SimulatedTask::LaunchDrone { .. } => TaskKind::DroneFootage,
            SimulatedTask::SubmitContact { .. } => TaskKind::ContactSubmit,
        }
    }
}

/// Result delivered once a task completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    TourReady { reference: String },
    DroneReady { reference: String },
    Submitted(Result<(), SubmitError>),
}

/// Fixed latencies for the launch actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchDelays {
    pub tour: Duration,
    pub drone: Duration,
}

impl Default for LaunchDelays {
    fn default() -> Self {
        Self {
            tour: Duration::from_millis(1500),
            drone: Duration::from_millis(1500),
        }
    }
}

/// Spawns simulated tasks and reports each outcome on a channel
pub struct TaskRunner {
    handle: Handle,
    delays: LaunchDelays,
    submitter: Arc<dyn ContactSubmitter>,
    outcomes: UnboundedSender<TaskOutcome>,
}

impl TaskRunner {
    /// Create a runner plus the receiving end the UI loop drains
    pub fn new(
        handle: Handle,
        delays: LaunchDelays,
        submitter: Arc<dyn ContactSubmitter>,
    ) -> (Self, UnboundedReceiver<TaskOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let runner = Self {
            handle,
            delays,
            submitter,
            outcomes: tx,
        };
        (runner, rx)
    }

    /// Run `task` to completion in the background. There is no cancellation.
    pub fn spawn(&self, task: SimulatedTask) -> JoinHandle<()> {
        let delays = self.delays;
        let submitter = Arc::clone(&self.submitter);
        let outcomes = self.outcomes.clone();

        self.handle.spawn(async move {
            let kind = task.kind();
            let outcome = run_task(task, delays, submitter.as_ref()).await;
            tracing::debug!(?kind, ?outcome, "Simulated task finished");
            if outcomes.send(outcome).is_err() {
                tracing::debug!(?kind, "Outcome dropped, receiver closed");
            }
        })
    }
}

async fn run_task(
    task: SimulatedTask,
    delays: LaunchDelays,
    submitter: &dyn ContactSubmitter,
) -> TaskOutcome {
    match task {
        SimulatedTask::LaunchTour { reference } => {
            tokio::time::sleep(delays.tour).await;
            TaskOutcome::TourReady { reference }
        }
        SimulatedTask::LaunchDrone { reference } => {
            tokio::time::sleep(delays.drone).await;
            TaskOutcome::DroneReady { reference }
        }
        SimulatedTask::SubmitContact { payload } => {
            TaskOutcome::Submitted(submitter.submit(&payload).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{SimulatedSubmitter, SubmitBehavior};
    use tokio::time::{timeout, Instant};

    fn runner(submit_delay_ms: u64, behavior: SubmitBehavior) -> (TaskRunner, UnboundedReceiver<TaskOutcome>) {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(submit_delay_ms), behavior);
        TaskRunner::new(Handle::current(), LaunchDelays::default(), Arc::new(submitter))
    }

    #[tokio::test(start_paused = true)]
    async fn test_tour_completes_after_fixed_delay() {
        let (runner, mut rx) = runner(2000, SubmitBehavior::Succeed);
        let start = Instant::now();
        runner.spawn(SimulatedTask::LaunchTour { reference: "https://tour".into() });

        assert!(timeout(Duration::from_millis(1499), rx.recv()).await.is_err());

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome, TaskOutcome::TourReady { reference: "https://tour".into() });
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drone_outcome() {
        let (runner, mut rx) = runner(2000, SubmitBehavior::Succeed);
        runner.spawn(SimulatedTask::LaunchDrone { reference: "https://drone".into() });
        assert_eq!(
            rx.recv().await.unwrap(),
            TaskOutcome::DroneReady { reference: "https://drone".into() }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_submitter() {
        let (runner, mut rx) = runner(2000, SubmitBehavior::Succeed);
        let start = Instant::now();
        runner.spawn(SimulatedTask::SubmitContact { payload: ContactForm::default() });

        assert!(timeout(Duration::from_millis(1999), rx.recv()).await.is_err());
        assert_eq!(rx.recv().await.unwrap(), TaskOutcome::Submitted(Ok(())));
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_failure_is_reported() {
        let (runner, mut rx) = runner(10, SubmitBehavior::Fail("offline".into()));
        runner.spawn(SimulatedTask::SubmitContact { payload: ContactForm::default() });
        assert_eq!(
            rx.recv().await.unwrap(),
            TaskOutcome::Submitted(Err(SubmitError::Network("offline".into())))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_receiver_does_not_panic() {
        let (runner, rx) = runner(10, SubmitBehavior::Succeed);
        drop(rx);
        let handle = runner.spawn(SimulatedTask::LaunchTour { reference: "x".into() });
        handle.await.unwrap();
    }
}
