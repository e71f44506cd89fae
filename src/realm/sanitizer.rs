use serde_json::Value;
use tracing::debug;

/// Value written over anything the operator has to supply before applying the resource
pub const PLACEHOLDER: &str = "__OVERWRITE_ME__";

/// Keys that either leak instance-specific state or make the realm import fail
pub const DENYLIST: &[&str] = &[
    "id",
    "_id",
    "containerId",
    "createdDate",
    "createdTimestamp",
    "webAuthnPolicyExtraOrigins",
    "webAuthnPolicyPasswordlessExtraOrigins",
    "keycloakVersion",
    "localizationTexts",
];

/// Key whose children are treated as client representations
pub const CLIENTS_KEY: &str = "clients";

/// Client field masked with the placeholder
pub const SECRET_KEY: &str = "secret";

/// What a sanitizing pass changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SanitizeStats {
    /// Denylisted keys removed, at any depth
    pub removed_keys: usize,
    /// Client secrets replaced by the placeholder
    pub masked_secrets: usize,
}

/// Scrubs a realm export so it can be fed to a KeycloakRealmImport.
#[derive(Clone, Debug)]
pub struct RealmSanitizer {
    denylist: Vec<String>,
    placeholder: String,
}

impl Default for RealmSanitizer {
    fn default() -> Self {
        Self::new(DENYLIST.iter().copied(), PLACEHOLDER)
    }
}

impl RealmSanitizer {
    pub fn new<I, S>(denylist: I, placeholder: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            denylist: denylist.into_iter().map(Into::into).collect(),
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_denied(&self, key: &str) -> bool {
        self.denylist.iter().any(|denied| denied == key)
    }

    /// Sanitize a whole realm document, starting outside any client context
    pub fn sanitize(&self, realm: &mut Value) -> SanitizeStats {
        self.sanitize_node(realm, false)
    }

    /// Sanitize a subtree. `in_client_context` is true when `node` was reached
    /// through a `clients` key.
    pub fn sanitize_node(&self, node: &mut Value, in_client_context: bool) -> SanitizeStats {
        let mut stats = SanitizeStats::default();
        self.visit(node, in_client_context, &mut stats);
        stats
    }

    fn visit(&self, node: &mut Value, in_client_context: bool, stats: &mut SanitizeStats) {
        let Value::Object(map) = node else {
            return;
        };

        let before = map.len();
        map.retain(|key, _| {
            let denied = self.is_denied(key);
            if denied {
                debug!(key = %key, "Removing denylisted key");
            }
            !denied
        });
        stats.removed_keys += before - map.len();

        for (key, value) in map.iter_mut() {
            let child_context = key.as_str() == CLIENTS_KEY;

            if in_client_context && key.as_str() == SECRET_KEY {
                if value.as_str() != Some(self.placeholder.as_str()) {
                    debug!("Masking client secret");
                    *value = Value::String(self.placeholder.clone());
                    stats.masked_secrets += 1;
                }
            } else if value.is_object() {
                // Keycloak exports `clients` as a list; an object here still
                // enters client context.
                self.visit(value, child_context, stats);
            } else if let Value::Array(items) = value {
                for item in items.iter_mut().filter(|item| item.is_object()) {
                    self.visit(item, child_context, stats);
                }
            }
        }
    }
}

/// Sanitize `node` in place with the default denylist and placeholder
pub fn sanitize(node: &mut Value, in_client_context: bool) -> SanitizeStats {
    RealmSanitizer::default().sanitize_node(node, in_client_context)
}
