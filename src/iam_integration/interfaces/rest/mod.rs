pub mod principal_header_resolver;
