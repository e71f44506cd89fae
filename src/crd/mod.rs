pub mod common;
pub mod keycloak_realm_import;

pub use keycloak_realm_import::*;
