use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    iam_integration::{
        application::acl::directory_identity_context_facade_impl::DirectoryIdentityContextFacadeImpl,
        infrastructure::persistence::repositories::{
            postgres::sqlx_principal_directory_repository_impl::SqlxPrincipalDirectoryRepositoryImpl,
            principal_directory_repository::PrincipalDirectoryRepository,
        },
        interfaces::acl::identity_context_facade::IdentityContextFacade,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_principal_directory(pool: PgPool) -> Arc<dyn PrincipalDirectoryRepository> {
    Arc::new(SqlxPrincipalDirectoryRepositoryImpl::new(pool))
}

pub fn build_identity_context(
    directory_repository: Arc<dyn PrincipalDirectoryRepository>,
    config: &AppConfig,
) -> Arc<dyn IdentityContextFacade> {
    Arc::new(DirectoryIdentityContextFacadeImpl::new(
        directory_repository,
        config.retry_policy(),
    ))
}
