//! Mnemonic and API key loading.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{ResolverError, ResolverResult};

/// Default location of the mnemonic phrase, relative to the working directory.
pub const DEFAULT_MNEMONIC_PATH: &str = ".secret";

/// Default location of the RPC provider API key.
pub const DEFAULT_API_KEY_PATH: &str = ".infuraKey";

/// The process-wide secret pair.
///
/// Both values are trimmed and guaranteed non-empty. There is no way to
/// obtain a `Credential` with only one of the two values populated. Not
/// `Clone`: share the single instance through `Arc`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    mnemonic: String,
    api_key: String,
}

impl Credential {
    /// Load both secrets from disk.
    ///
    /// Fails with [`ResolverError::CredentialUnavailable`] if either file is
    /// missing, unreadable, or blank, or if both paths name the same file.
    pub fn load(mnemonic_path: &Path, api_key_path: &Path) -> ResolverResult<Self> {
        if mnemonic_path == api_key_path {
            return Err(ResolverError::CredentialUnavailable {
                path: api_key_path.to_path_buf(),
                reason: "mnemonic and API key must be stored in distinct files".to_string(),
            });
        }

        let mnemonic = read_secret(mnemonic_path)?;
        let api_key = read_secret(api_key_path)?;

        tracing::info!(
            mnemonic_path = %mnemonic_path.display(),
            api_key_path = %api_key_path.display(),
            "Credentials loaded"
        );

        Ok(Self { mnemonic, api_key })
    }

    /// Build a credential from in-memory values, applying the same trimming
    /// and emptiness rules as [`Credential::load`].
    pub fn from_parts(mnemonic: &str, api_key: &str) -> ResolverResult<Self> {
        let mnemonic = non_empty(mnemonic, Path::new("<mnemonic>"))?;
        let api_key = non_empty(api_key, Path::new("<api key>"))?;
        Ok(Self { mnemonic, api_key })
    }

    /// The trimmed mnemonic phrase.
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The trimmed API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("mnemonic", &"<redacted>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn read_secret(path: &Path) -> ResolverResult<String> {
    let mut raw = fs::read_to_string(path).map_err(|e| {
        let reason = match e.kind() {
            ErrorKind::NotFound => "file not found".to_string(),
            _ => format!("unreadable: {}", e),
        };
        ResolverError::CredentialUnavailable {
            path: path.to_path_buf(),
            reason,
        }
    })?;

    let result = non_empty(&raw, path);
    raw.zeroize();
    result
}

fn non_empty(value: &str, path: &Path) -> ResolverResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ResolverError::CredentialUnavailable {
            path: PathBuf::from(path),
            reason: "file is empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
