pub mod access_control;
pub mod approval_workflow;
pub mod budgeting;
pub mod config;
pub mod event_management;
pub mod iam_integration;
pub mod notifications;
pub mod shared;
pub mod venue_gate;
