use log::{debug, info};
use rustls::pki_types::CertificateDer;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.certs.len())
            .field("keystore_path", &self.keystore_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateBundle {
    /// Reads the chain and private key from a PEM keystore.
    ///
    /// PEM keystores carry no store-level protection, so `keystore_password`
    /// is only checked for presence in the logs; a key that is itself
    /// encrypted is refused.
    pub fn load_keystore(
        keystore_path: &str,
        keystore_password: &str,
        key_password: &str,
    ) -> Result<CertificateBundle, CertificateError> {
        let data = std::fs::read(keystore_path)
            .map_err(|e| CertificateError::KeystoreNotFound(format!("{keystore_path}: {e}")))?;

        if String::from_utf8_lossy(&data).contains("ENCRYPTED PRIVATE KEY") {
            return Err(CertificateError::EncryptedKey(keystore_path.to_string()));
        }
        if !keystore_password.is_empty() || !key_password.is_empty() {
            debug!("[SSL] Passwords given for {keystore_path} are not needed for a PEM keystore");
        }

        let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut data.as_slice())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        if certs.is_empty() {
            return Err(CertificateError::CertParseError(String::from("No certificates found in keystore")));
        }

        let key = rustls_pemfile::private_key(&mut data.as_slice())
            .map_err(|e| CertificateError::KeyParseError(e.to_string()))?
            .ok_or(CertificateError::NoKeyFound)?;

        info!("[SSL] Loaded keystore {} with {} certificate(s)", keystore_path, certs.len());
        Ok(CertificateBundle {
            certs,
            key,
            loaded_at: chrono::Utc::now(),
            keystore_path: keystore_path.to_string(),
        })
    }
}
