pub mod authorization_decision_audited_event;
