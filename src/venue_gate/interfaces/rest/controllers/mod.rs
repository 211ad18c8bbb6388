pub mod venue_gate_rest_controller;
