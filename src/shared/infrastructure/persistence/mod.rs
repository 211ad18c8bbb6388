pub mod postgres_pool;
