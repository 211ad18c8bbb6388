pub mod inbox_rest_controller;
