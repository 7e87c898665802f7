use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Keystore file not found: {0}")]
    KeystoreNotFound(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No private key found in keystore")]
    NoKeyFound,
    #[error("Encrypted private keys are not supported: {0}")]
    EncryptedKey(String),
    #[error("Failed to build TLS configuration: {0}")]
    ConfigError(String),
    #[error("Failed to generate certificate: {0}")]
    GenerateError(String),
    #[error("Failed to write keystore {path}: {message}")]
    WriteError { path: String, message: String },
}
