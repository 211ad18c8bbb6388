pub mod event_registry_facade;
