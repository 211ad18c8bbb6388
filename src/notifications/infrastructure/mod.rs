pub mod outbox;
pub mod persistence;
