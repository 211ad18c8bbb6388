pub mod principal_role;
