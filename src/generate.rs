use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::adapters::{build_custom_resource, render_yaml};
use crate::error::{Error, Result};
use crate::realm::{RealmSanitizer, SanitizeStats};

/// Outcome of a successful conversion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Name of the generated KeycloakRealmImport
    pub realm: String,
    pub stats: SanitizeStats,
}

/// Load a Keycloak realm export
pub fn load_realm_export(path: &Path) -> Result<Value> {
    let raw = fs::read(path).map_err(|e| Error::from_read(path, e))?;
    serde_json::from_slice(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the rendered resource, creating or truncating `path`
pub fn write_resource(path: &Path, yaml: &str) -> Result<()> {
    fs::write(path, yaml).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert the realm export at `input` into a KeycloakRealmImport written to `output`
pub fn generate(input: &Path, output: &Path) -> Result<GenerateSummary> {
    generate_with(&RealmSanitizer::default(), input, output)
}

pub fn generate_with(
    sanitizer: &RealmSanitizer,
    input: &Path,
    output: &Path,
) -> Result<GenerateSummary> {
    let mut realm = load_realm_export(input)?;
    debug!(input = %input.display(), "Loaded realm export");

    let stats = sanitizer.sanitize(&mut realm);

    let resource = build_custom_resource(realm)?;
    let name = resource.metadata.name.clone().unwrap_or_default();
    let yaml = render_yaml(&resource)?;

    write_resource(output, &yaml)?;

    info!(
        realm = %name,
        output = %output.display(),
        removed_keys = stats.removed_keys,
        masked_secrets = stats.masked_secrets,
        "Generated KeycloakRealmImport"
    );

    Ok(GenerateSummary { realm: name, stats })
}
