#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn deepmorph_cmd() -> Command {
    Command::cargo_bin("deepmorph").unwrap()
}

/// Command isolated from any real $HOME config
pub fn isolated_cmd(env: &TestEnvironment) -> Command {
    let mut cmd = deepmorph_cmd();
    cmd.env("DEEPMORPH_HOME", env.home())
        .env_remove("RUST_LOG")
        .env_remove("DEEPMORPH_LOG");
    cmd
}

/// Create a simple test FASTA with n sequences
pub fn create_simple_fasta(n: usize) -> String {
    let mut content = String::new();
    for i in 0..n {
        content.push_str(&format!(">seq_{} Test sequence {}\n", i, i));
        content.push_str("ATGCGATCGATCGATCGTAGCTAGCTAGCTAGC\n");
        content.push_str("TATAAAGCCGCCATTCGATCGA\n");
    }
    content
}

fn profile(name: &str) -> Value {
    json!({
        "scientificName": name,
        "commonName": "test organism",
        "phylogeneticGroup": "Bacteria",
        "ecologicalRole": "Decomposer",
        "biosyntheticPotential": {
            "hasPotential": true,
            "compounds": ["Enzymes"],
            "applications": ["Testing"]
        }
    })
}

/// Catalog JSON with the given known and novel scientific names
pub fn catalog_json(known: &[&str], novel: &[&str]) -> String {
    json!({
        "known": known.iter().map(|n| profile(n)).collect::<Vec<_>>(),
        "novel": novel.iter().map(|n| profile(n)).collect::<Vec<_>>(),
    })
    .to_string()
}

pub fn parse_json(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout should be valid JSON")
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        create_file(self.temp_dir.path(), name, content)
    }
}

pub fn create_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}
