//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Generates a KeycloakRealmImport resource from a Keycloak realm export.
#[derive(Debug, Parser)]
#[command(name = "keycloak-realm-import")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Keycloak realm export JSON file.
    pub input: PathBuf,

    /// Output KeycloakRealmImport YAML file.
    pub output: PathBuf,
}
