pub mod access_control_rest_controller;
