//! Keycloak realm export to KeycloakRealmImport converter
//!
//! Scrubs ids, timestamps and client secrets out of a realm export and wraps
//! the result in a `KeycloakRealmImport` custom resource for the Keycloak
//! operator.

pub mod adapters;
pub mod cli;
pub mod crd;
pub mod error;
pub mod generate;
pub mod realm;

pub use error::{Error, Result};
