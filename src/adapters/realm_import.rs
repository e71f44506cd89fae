use std::collections::BTreeMap;

use serde_json::Value;

use crate::crd::{KeycloakRealmImport, KeycloakRealmImportSpec};
use crate::error::{Error, Result};
use crate::realm::PLACEHOLDER;

use super::yaml::emit_document;

/// Top-level field of a realm export holding the realm name
pub const REALM_NAME_FIELD: &str = "realm";

pub const APP_LABEL_KEY: &str = "app";
pub const APP_LABEL_VALUE: &str = "keycloak";

/// Wrap a sanitized realm export in a KeycloakRealmImport.
///
/// The resource is named after the realm. Namespace and `keycloakCRName` are
/// left as placeholders for whoever applies it.
pub fn build_custom_resource(realm: Value) -> Result<KeycloakRealmImport> {
    let name = realm_name(&realm)?.to_string();

    let spec = KeycloakRealmImportSpec {
        keycloak_cr_name: PLACEHOLDER.to_string(),
        realm,
    };

    let mut resource = KeycloakRealmImport::new(&name, spec);
    resource.metadata.namespace = Some(PLACEHOLDER.to_string());
    resource.metadata.labels = Some(BTreeMap::from([(
        APP_LABEL_KEY.to_string(),
        APP_LABEL_VALUE.to_string(),
    )]));

    Ok(resource)
}

/// Read the realm name from an export document
pub fn realm_name(realm: &Value) -> Result<&str> {
    realm
        .get(REALM_NAME_FIELD)
        .ok_or(Error::MissingField(REALM_NAME_FIELD))?
        .as_str()
        .ok_or(Error::InvalidField {
            field: REALM_NAME_FIELD,
            expected: "string",
        })
}

/// Render the resource as a block-style YAML document
pub fn render_yaml(resource: &KeycloakRealmImport) -> Result<String> {
    emit_document(&serde_json::to_value(resource)?)
}
