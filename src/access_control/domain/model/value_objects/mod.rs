pub mod resource_ownership;
