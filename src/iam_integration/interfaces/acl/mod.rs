pub mod identity_context_facade;
