//! Credential bootstrap at startup.

use std::io;

use crate::config::Config;
use crate::credentials::{load_or_prompt, CredentialStore, Credentials, CredentialsError};

/// The credential store selected by the configuration.
pub fn credential_store(config: &Config) -> CredentialStore {
    if config.encrypt_credentials {
        CredentialStore::Encrypted {
            path: config.credentials.clone(),
            key_path: config.key_file.clone(),
        }
    } else {
        CredentialStore::Plain {
            path: config.credentials.clone(),
        }
    }
}

/// Loads the credentials, asking on the console if none are stored yet.
pub fn load_credentials(config: &Config) -> Result<Credentials, CredentialsError> {
    let store = credential_store(config);
    let stdin = io::stdin();
    load_or_prompt(&store, &mut stdin.lock(), &mut io::stdout())
}
