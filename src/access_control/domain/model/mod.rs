pub mod enums;
pub mod events;
pub mod queries;
pub mod value_objects;
