pub mod acl;
pub mod rest;
