#[path = "support/fixtures.rs"]
pub mod fixtures;
#[path = "support/harness.rs"]
mod harness;

pub use harness::{
    WorkflowHarness, create_workflow_harness, create_workflow_harness_publishing_to,
};
