//! Hermetic environment for driving the `pass-profile` binary.
//!
//! A shell script stands in for `pass`: `ls` prints a tree of the directories
//! under `store/`, `show` prints a file's contents. `HOME` and
//! `XDG_CONFIG_HOME` point into the temp dir so no real store or override
//! files are touched.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use assert_cmd::Command;
use tempfile::TempDir;

const FAKE_PASS: &str = r#"#!/bin/sh
store="$FAKE_PASS_STORE"
if [ -f "$store/.broken" ]; then
    echo "gpg: decryption failed: No secret key" >&2
    exit 2
fi
case "$1" in
    ls)
        dir="$store/$2"
        if [ ! -d "$dir" ]; then
            echo "Error: $2 is not in the password store." >&2
            exit 1
        fi
        echo "$2"
        for entry in $(ls "$dir"); do
            echo "├── $entry"
            if [ -d "$dir/$entry" ]; then
                for child in $(ls "$dir/$entry"); do
                    echo "│   └── $child"
                done
            fi
        done
        ;;
    show)
        if [ ! -f "$store/$2" ]; then
            echo "Error: $2 is not in the password store." >&2
            exit 1
        fi
        cat "$store/$2"
        ;;
    *)
        exit 64
        ;;
esac
"#;

/// Written once per test binary, before any test spawns a process.
fn fake_pass() -> &'static Path {
    static BIN: OnceLock<(TempDir, PathBuf)> = OnceLock::new();
    let (_, pass) = BIN.get_or_init(|| {
        let dir = TempDir::new().unwrap();
        let pass = dir.path().join("pass");
        fs::write(&pass, FAKE_PASS).unwrap();
        fs::set_permissions(&pass, fs::Permissions::from_mode(0o755)).unwrap();
        (dir, pass)
    });
    pass
}

pub struct Env {
    pub dir: TempDir,
}

impl Env {
    pub fn new() -> Self {
        let pass = fake_pass();
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("store")).unwrap();
        fs::create_dir_all(dir.path().join("home")).unwrap();

        let config_dir = dir.path().join("config").join("pass-profile");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.toml"),
            format!("[store]\nprogram = \"{}\"\n", pass.display()),
        )
        .unwrap();

        Self { dir }
    }

    pub fn pass_program(&self) -> &'static Path {
        fake_pass()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Store a secret at `reference` (e.g. `Profile/work/db_pass`).
    pub fn secret(&self, reference: &str, value: &str) -> &Self {
        let path = self.path().join("store").join(reference);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, value).unwrap();
        self
    }

    /// Create an empty namespace directory in the store.
    pub fn namespace(&self, namespace: &str) -> &Self {
        fs::create_dir_all(self.path().join("store").join(namespace)).unwrap();
        self
    }

    /// Write the override file for `profile` in the default location.
    pub fn profile_file(&self, profile: &str, contents: &str) -> PathBuf {
        let dir = self.path().join("home").join(".pass-profile").join("profile");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(profile);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn break_store(&self) {
        fs::write(self.path().join("store").join(".broken"), "").unwrap();
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pass-profile");
        cmd.env("DOTENV_DISABLED", "1")
            .env("HOME", self.path().join("home"))
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("FAKE_PASS_STORE", self.path().join("store"))
            .env("NO_COLOR", "1")
            .env_remove("PASS_PROFILE_LOG")
            .current_dir(self.path());
        cmd
    }
}
