pub mod event_rest_controller;
