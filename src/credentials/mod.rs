//! Bot credential storage.
//!
//! Credentials are a bot token and the operator's Telegram user ID, stored
//! as two lines of text. The file can optionally be sealed with AES-256-GCM
//! under a locally generated key.

mod cipher;

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

/// Why credentials could not be loaded or saved.
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// The credentials file does not exist yet.
    #[error("credentials file {0} not found")]
    Missing(PathBuf),

    /// The file exists but does not hold a token and a numeric user ID.
    #[error("malformed credentials: {0}")]
    Malformed(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("credentials encryption error: {0}")]
    Crypto(String),
}

impl CredentialsError {
    fn io(path: &Path, source: io::Error) -> Self {
        CredentialsError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Bot token plus the operator's Telegram user ID.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub operator_id: i64,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("operator_id", &self.operator_id)
            .finish()
    }
}

impl Credentials {
    /// Builds credentials from raw input, trimming both values.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError::Malformed` on an empty token or a
    /// non-numeric user ID.
    pub fn new(token: &str, operator_id: &str) -> Result<Self, CredentialsError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CredentialsError::Malformed("empty bot token".to_string()));
        }
        let operator_id = operator_id.trim().parse::<i64>().map_err(|_| {
            CredentialsError::Malformed(format!("user ID '{}' is not a number", operator_id.trim()))
        })?;
        Ok(Credentials {
            token: token.to_string(),
            operator_id,
        })
    }

    /// Two-line text form: token, then user ID.
    fn to_text(&self) -> String {
        format!("{}\n{}", self.token, self.operator_id)
    }

    fn from_text(text: &str) -> Result<Self, CredentialsError> {
        let mut lines = text.lines();
        match (lines.next(), lines.next()) {
            (Some(token), Some(id)) => Credentials::new(token, id),
            _ => Err(CredentialsError::Malformed(
                "expected the bot token and the user ID on two lines".to_string(),
            )),
        }
    }
}

/// Where and how credentials are persisted.
#[derive(Debug, Clone)]
pub enum CredentialStore {
    /// Two plaintext lines
    Plain { path: PathBuf },
    /// Two lines sealed with the key in `key_path`
    Encrypted { path: PathBuf, key_path: PathBuf },
}

impl CredentialStore {
    pub fn path(&self) -> &Path {
        match self {
            CredentialStore::Plain { path } | CredentialStore::Encrypted { path, .. } => path,
        }
    }

    /// Loads the stored credentials.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError::Missing` if the file does not exist, and
    /// another variant if it cannot be read, decrypted or parsed.
    pub fn load(&self) -> Result<Credentials, CredentialsError> {
        let path = self.path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CredentialsError::Missing(path.to_path_buf()))
            }
            Err(e) => return Err(CredentialsError::io(path, e)),
        };

        let plaintext = match self {
            CredentialStore::Plain { .. } => bytes,
            CredentialStore::Encrypted { key_path, .. } => {
                let key = cipher::read_key(key_path)?;
                cipher::open(&key, &bytes)?
            }
        };

        let text = String::from_utf8(plaintext).map_err(|_| {
            CredentialsError::Malformed("credentials are not valid UTF-8".to_string())
        })?;
        Credentials::from_text(&text)
    }

    /// Persists the credentials, creating the key file first if needed.
    pub fn save(&self, credentials: &Credentials) -> Result<(), CredentialsError> {
        let text = credentials.to_text();
        let bytes = match self {
            CredentialStore::Plain { .. } => text.into_bytes(),
            CredentialStore::Encrypted { key_path, .. } => {
                let key = cipher::read_or_create_key(key_path)?;
                cipher::seal(&key, text.as_bytes())?
            }
        };
        let path = self.path();
        fs::write(path, bytes).map_err(|e| CredentialsError::io(path, e))?;
        info!("Credentials saved to {}", path.display());
        Ok(())
    }
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, CredentialsError> {
    let console = Path::new("<console>");
    write!(output, "{question}").map_err(|e| CredentialsError::io(console, e))?;
    output.flush().map_err(|e| CredentialsError::io(console, e))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| CredentialsError::io(console, e))?;
    Ok(line.trim().to_string())
}

/// Asks for the bot token and the user ID on the console.
pub fn prompt_credentials<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Credentials, CredentialsError> {
    let token = prompt_line(input, output, "Introduce el TOKEN del bot de Telegram: ")?;
    let operator_id = prompt_line(input, output, "Introduce tu ID de usuario de Telegram: ")?;
    Credentials::new(&token, &operator_id)
}

/// Loads credentials, prompting and saving them when the file is missing.
///
/// # Errors
///
/// Any failure other than a missing file is returned as is.
pub fn load_or_prompt<R: BufRead, W: Write>(
    store: &CredentialStore,
    input: &mut R,
    output: &mut W,
) -> Result<Credentials, CredentialsError> {
    match store.load() {
        Ok(credentials) => Ok(credentials),
        Err(CredentialsError::Missing(path)) => {
            info!("No credentials at {}, asking on the console", path.display());
            let credentials = prompt_credentials(input, output)?;
            store.save(&credentials)?;
            Ok(credentials)
        }
        Err(e) => Err(e),
    }
}
