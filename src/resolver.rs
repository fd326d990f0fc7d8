// Resolvers - produce a SecretMapping for a profile, or report it absent

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::backend::SecretStore;
use crate::error::Error;
use crate::mapping::SecretMapping;
use crate::tree;

pub trait Resolver {
    /// Human-readable source name used in diagnostics.
    fn source(&self) -> &'static str;
    /// `Ok(None)` means the profile does not exist in this source.
    fn resolve(&self, profile: &str) -> Result<Option<SecretMapping>, Error>;
}

/// Entries listed under `<namespace>/<profile>` in the password store.
pub struct StoreResolver<'a, S: SecretStore> {
    store: &'a S,
    namespace: String,
}

impl<'a, S: SecretStore> StoreResolver<'a, S> {
    pub fn new(store: &'a S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }
}

impl<S: SecretStore> Resolver for StoreResolver<'_, S> {
    fn source(&self) -> &'static str {
        "pass"
    }

    fn resolve(&self, profile: &str) -> Result<Option<SecretMapping>, Error> {
        let profile_ns = format!("{}/{}", self.namespace, profile);
        let Some(listing) = self.store.list(&profile_ns)? else {
            return Ok(None);
        };

        let mapping = tree::leaf_names(&listing, &profile_ns)
            .into_iter()
            .map(|entry| (entry.to_uppercase(), format!("{profile_ns}/{entry}")))
            .collect();
        Ok(Some(mapping))
    }
}

/// One flat file per profile inside a local directory.
pub struct FileResolver {
    dir: PathBuf,
}

impl FileResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Resolver for FileResolver {
    fn source(&self) -> &'static str {
        "file"
    }

    fn resolve(&self, profile: &str) -> Result<Option<SecretMapping>, Error> {
        let path = self.dir.join(profile);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(parse_profile_file(&contents))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no profile file");
                Ok(None)
            }
            Err(source) => Err(Error::ProfileFile { path, source }),
        }
    }
}

/// Parses override-file lines.
///
/// `NAME: path` keeps `NAME` exactly as written; a bare `path` is named after
/// its last segment, upper-cased. Blank lines and `#` comments are skipped and
/// later lines win over earlier ones.
pub fn parse_profile_file(contents: &str) -> SecretMapping {
    let mut mapping = SecretMapping::new();
    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once(':') {
            Some((name, reference)) => {
                mapping.insert(name.trim(), reference.trim());
            }
            None => {
                let name = line.rsplit('/').next().unwrap_or(line).to_uppercase();
                mapping.insert(name, line);
            }
        }
    }
    mapping
}
