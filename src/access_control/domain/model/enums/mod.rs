pub mod access_control_domain_error;
pub mod capability_action;
pub mod grant_scope;
pub mod permission_effect;
