pub mod authorization_decision_audit_repository;
pub mod postgres;
