pub mod venue_gate_query_service_impl;
