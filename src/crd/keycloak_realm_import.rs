use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::keycloak_representation;

/// KeycloakRealmImport asks the Keycloak operator to import a realm into the
/// Keycloak instance named by `keycloakCRName`.
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "k8s.keycloak.org",
    version = "v2alpha1",
    kind = "KeycloakRealmImport",
    plural = "keycloakrealmimports",
    namespaced
)]
pub struct KeycloakRealmImportSpec {
    /// Name of the Keycloak CR the realm is imported into
    #[serde(rename = "keycloakCRName")]
    pub keycloak_cr_name: String,

    /// Sanitized realm representation, passed through as-is
    #[schemars(schema_with = "keycloak_representation")]
    pub realm: serde_json::Value,
}
