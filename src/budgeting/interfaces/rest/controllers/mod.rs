pub mod budget_rest_controller;
