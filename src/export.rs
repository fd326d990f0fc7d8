// Materializer - resolve values and render `export` lines

use crate::backend::SecretStore;
use crate::error::Error;
use crate::mapping::SecretMapping;

/// Escape `"` so the value can sit inside a double-quoted shell string.
pub fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

pub fn render_export(name: &str, value: &str) -> String {
    format!("export {}=\"{}\"", name, escape_value(value))
}

/// Resolve every entry and render its assignment, in mapping order.
///
/// Empty values are skipped. The first retrieval failure aborts the whole run,
/// so nothing is returned for printing unless every lookup succeeded.
pub fn materialize<S: SecretStore>(store: &S, mapping: &SecretMapping) -> Result<Vec<String>, Error> {
    let mut lines = Vec::with_capacity(mapping.len());
    for (name, reference) in mapping {
        let value = store.get(reference)?;
        if value.is_empty() {
            tracing::debug!(name = %name, "empty value, skipping");
            continue;
        }
        lines.push(render_export(name, &value));
    }
    Ok(lines)
}
