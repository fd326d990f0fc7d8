use std::io::Write;

use colored::Colorize;

use crate::backend::{PassStore, SecretStore};
use crate::config::Config;
use crate::error::Error;
use crate::export::materialize;
use crate::mapping::SecretMapping;
use crate::merge::merge;
use crate::resolver::{FileResolver, Resolver, StoreResolver};

/// Print a warning to stderr; stdout is reserved for shell code
fn warning(msg: &str) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self, profile: &str) -> Result<(), Error> {
        let store = PassStore::new(&self.config.store);
        let lines = self.exports(&store, profile)?;

        let mut out = std::io::stdout().lock();
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Every `export` line for `profile`, rendered before anything is printed.
    fn exports<S: SecretStore>(&self, store: &S, profile: &str) -> Result<Vec<String>, Error> {
        let from_store = resolve(&StoreResolver::new(store, &self.config.store.namespace), profile)?;
        let from_file = resolve(&FileResolver::new(self.config.profile_dir()?), profile)?;

        let merged = merge(profile, from_store, from_file)?;
        for name in &merged.collisions {
            warning(&format!(
                "Entry '{}' exists in both pass and file profile. Using file version.",
                name
            ));
        }

        if merged.mapping.is_empty() {
            warning(&format!("No environment variables found for profile '{}'", profile));
            return Ok(Vec::new());
        }

        tracing::debug!(names = ?merged.mapping.names().collect::<Vec<_>>(), "resolving values");
        materialize(store, &merged.mapping)
    }
}

fn resolve(resolver: &dyn Resolver, profile: &str) -> Result<Option<SecretMapping>, Error> {
    let mapping = resolver.resolve(profile)?;
    match &mapping {
        Some(m) => tracing::debug!(source = resolver.source(), profile, entries = m.len(), "profile found"),
        None => tracing::debug!(source = resolver.source(), profile, "profile absent"),
    }
    Ok(mapping)
}
