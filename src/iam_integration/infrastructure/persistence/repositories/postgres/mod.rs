pub mod sqlx_principal_directory_repository_impl;
