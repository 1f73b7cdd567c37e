//! Canonicalización JSON + hash para identidad de definiciones de flujo.
//!
//! El `definition_hash` permite al caller detectar que el pipeline de una
//! tarea cambió entre fetches y descartar proyecciones optimistas obsoletas.
//! El hash se calcula sobre JSON canonicalizado (claves ordenadas) para que
//! el orden de serialización no afecte la identidad.

use blake3::Hasher;
use serde_json::Value;

/// Serializa un `Value` a JSON canónico: objetos con claves en orden
/// lexicográfico, sin whitespace.
pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => serde_json::to_string(s).unwrap_or_default(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(to_canonical_json).collect();
            format!("[{}]", inner.join(","))
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let inner: Vec<String> = keys.into_iter()
                                         .map(|k| {
                                             let key = serde_json::to_string(k).unwrap_or_default();
                                             format!("{}:{}", key, to_canonical_json(&map[k]))
                                         })
                                         .collect();
            format!("{{{}}}", inner.join(","))
        }
    }
}

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Hash de un `Value` vía su forma canónica.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}
