// Password-store backend - trait + `pass` implementation

use std::process::{Command, Output};

use crate::config::StoreConfig;
use crate::error::Error;

/// Marker the backend prints on stderr for a path it does not know.
const NOT_IN_STORE: &str = "is not in the password store";

pub trait SecretStore {
    /// Tree listing of `namespace`, or `None` when the namespace does not exist.
    fn list(&self, namespace: &str) -> Result<Option<String>, Error>;
    /// Plaintext value stored at `reference`, surrounding whitespace trimmed.
    fn get(&self, reference: &str) -> Result<String, Error>;
}

/// Runs the `pass` command-line program.
pub struct PassStore {
    program: String,
}

impl PassStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            program: config.program.clone(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output, Error> {
        tracing::debug!(program = %self.program, ?args, "running backend");
        Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| Error::Backend {
                command: self.describe(args),
                stderr: e.to_string(),
            })
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    fn failure(&self, args: &[&str], output: &Output) -> Error {
        Error::Backend {
            command: self.describe(args),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Decode stdout, refusing anything that is not valid UTF-8.
    fn stdout(&self, args: &[&str], output: Output) -> Result<String, Error> {
        String::from_utf8(output.stdout).map_err(|_| Error::Backend {
            command: self.describe(args),
            stderr: "output is not valid UTF-8".to_string(),
        })
    }
}

impl SecretStore for PassStore {
    fn list(&self, namespace: &str) -> Result<Option<String>, Error> {
        let args = ["ls", namespace];
        let output = self.run(&args)?;

        if !output.status.success() {
            if String::from_utf8_lossy(&output.stderr).contains(NOT_IN_STORE) {
                tracing::debug!(namespace, "namespace not in store");
                return Ok(None);
            }
            return Err(self.failure(&args, &output));
        }

        self.stdout(&args, output).map(Some)
    }

    fn get(&self, reference: &str) -> Result<String, Error> {
        let args = ["show", reference];
        let output = self.run(&args)?;

        if !output.status.success() {
            return Err(self.failure(&args, &output));
        }

        Ok(self.stdout(&args, output)?.trim().to_string())
    }
}
