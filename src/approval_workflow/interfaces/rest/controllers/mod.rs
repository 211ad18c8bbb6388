pub mod approval_rest_controller;
