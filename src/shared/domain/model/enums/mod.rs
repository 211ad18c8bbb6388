pub mod workflow_domain_error;
