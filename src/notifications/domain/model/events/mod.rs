pub mod workflow_outcome;
