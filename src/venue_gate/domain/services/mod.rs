pub mod resource_gate;
pub mod venue_gate_command_service;
pub mod venue_gate_query_service;
