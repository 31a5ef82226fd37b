// Operations module
// Simulated asynchronous actions and the host collaborators they hand off to

pub mod opener;
pub mod submission;
pub mod tasks;

pub use opener::{CommandOpener, ExternalOpener, OpenCommand, RecordingOpener};
pub use submission::{ContactSubmitter, SimulatedSubmitter, SubmitBehavior};
pub use tasks::{LaunchDelays, SimulatedTask, TaskKind, TaskOutcome, TaskRunner};
