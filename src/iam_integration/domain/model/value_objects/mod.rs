pub mod principal_id;
