pub mod sqlx_approval_record_repository_impl;
