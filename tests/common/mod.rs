//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Well-known test mnemonic (Anvil/Hardhat default accounts).
#[allow(dead_code)]
pub const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// A temporary directory holding the two secret files.
pub struct SecretDir {
    pub dir: TempDir,
    pub mnemonic_path: PathBuf,
    pub api_key_path: PathBuf,
}

/// Write `mnemonic` and `api_key` verbatim to `.secret` and `.infuraKey`.
pub fn write_secrets(mnemonic: &str, api_key: &str) -> SecretDir {
    let dir = TempDir::new().unwrap();
    let mnemonic_path = dir.path().join(".secret");
    let api_key_path = dir.path().join(".infuraKey");
    fs::write(&mnemonic_path, mnemonic).unwrap();
    fs::write(&api_key_path, api_key).unwrap();

    SecretDir {
        dir,
        mnemonic_path,
        api_key_path,
    }
}

/// Write a config file into the secret directory and return its path.
#[allow(dead_code)]
pub fn write_config(secrets: &SecretDir, body: &str) -> PathBuf {
    let path = secrets.dir.path().join("netprofile.toml");
    let header = format!(
        "[credentials]\nmnemonic_path = {:?}\napi_key_path = {:?}\n\n",
        secrets.mnemonic_path.display().to_string(),
        secrets.api_key_path.display().to_string(),
    );
    fs::write(&path, header + body).unwrap();
    path
}
