pub mod venue_gate_command_service_impl;
