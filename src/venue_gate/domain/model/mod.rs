pub mod commands;
pub mod entities;
pub mod queries;
pub mod value_objects;
