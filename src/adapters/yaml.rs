use serde_json::Value;
use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter};

use crate::error::Result;

/// Emit a JSON tree as a block-style YAML document.
///
/// Strings that a YAML 1.1 reader would resolve to something else (`yes`,
/// `on`, `null`, `123`, ...) come out quoted, so kubectl and PyYAML read back
/// exactly the tree that was emitted. Object key order is kept.
pub fn emit_document(value: &Value) -> Result<String> {
    let mut out = String::new();
    YamlEmitter::new(&mut out).dump(&to_yaml(value))?;
    out.push('\n');
    Ok(out)
}

fn to_yaml(value: &Value) -> Yaml {
    match value {
        Value::Null => Yaml::Null,
        Value::Bool(b) => Yaml::Boolean(*b),
        // Anything that is not an i64 keeps the literal text it was parsed from
        Value::Number(n) => match n.as_i64() {
            Some(i) => Yaml::Integer(i),
            None => Yaml::Real(n.to_string()),
        },
        Value::String(s) => Yaml::String(s.clone()),
        Value::Array(items) => Yaml::Array(items.iter().map(to_yaml).collect()),
        Value::Object(map) => {
            let mut hash = Hash::new();
            for (key, child) in map {
                hash.insert(Yaml::String(key.clone()), to_yaml(child));
            }
            Yaml::Hash(hash)
        }
    }
}
