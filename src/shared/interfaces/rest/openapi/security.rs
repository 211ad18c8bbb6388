use utoipa::{
    Modify,
    openapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

pub const PRINCIPAL_HEADER: &str = "x-principal-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct PrincipalHeaderSecurityAddon;

impl Modify for PrincipalHeaderSecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "principalHeader",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                PRINCIPAL_HEADER,
                "Principal id verified by the upstream gateway",
            ))),
        );
    }
}
