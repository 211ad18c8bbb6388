pub mod inbox_view;
pub mod notification_intent;
pub mod outcome_subject;
