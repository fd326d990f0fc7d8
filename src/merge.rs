// Merger - file entries override store entries

use crate::error::Error;
use crate::mapping::SecretMapping;

#[derive(Debug, Default, PartialEq)]
pub struct Merged {
    pub mapping: SecretMapping,
    /// Names defined by both sources, in file order
    pub collisions: Vec<String>,
}

/// Combine the store mapping with the file mapping on top.
///
/// Fails only when both sources are absent; an empty result is left to the caller.
pub fn merge(
    profile: &str,
    store: Option<SecretMapping>,
    file: Option<SecretMapping>,
) -> Result<Merged, Error> {
    if store.is_none() && file.is_none() {
        return Err(Error::ProfileNotFound(profile.to_string()));
    }

    let mut mapping = store.unwrap_or_default();
    let mut collisions = Vec::new();

    for (name, reference) in file.iter().flatten() {
        if mapping.insert(name.as_str(), reference.as_str()).is_some() {
            collisions.push(name.clone());
        }
    }

    Ok(Merged { mapping, collisions })
}
