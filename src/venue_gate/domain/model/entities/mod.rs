pub mod expense;
pub mod venue;
