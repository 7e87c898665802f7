use std::sync::Arc;
use log::info;
use rcgen::{CertificateParams, KeyPair};
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

/// TLS server configuration for `bundle`, pinned to the ring provider.
pub fn build_server_config(bundle: &CertificateBundle) -> Result<rustls::ServerConfig, CertificateError> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| CertificateError::ConfigError(e.to_string()))?
        .with_no_client_auth()
        .with_single_cert(bundle.certs.clone(), bundle.key.clone_key())
        .map_err(|e| CertificateError::ConfigError(e.to_string()))
}

/// Writes a self-signed certificate and its key into one PEM keystore.
/// Only meant for development.
pub fn generate_self_signed_keystore(keystore_path: &str, domain: &str) -> Result<(), CertificateError> {
    info!("[CERTGEN] Requesting to generate a self-signed keystore");

    let mut subject_alt_names = vec![String::from("localhost"), String::from("127.0.0.1")];
    if !subject_alt_names.iter().any(|name| name == domain) {
        subject_alt_names.push(domain.to_string());
    }

    let key_pair = KeyPair::generate().map_err(|e| CertificateError::GenerateError(e.to_string()))?;
    let params = CertificateParams::new(subject_alt_names)
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?;
    let cert = params.self_signed(&key_pair)
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?;

    let keystore = format!("{}{}", cert.pem(), key_pair.serialize_pem());
    std::fs::write(keystore_path, keystore).map_err(|e| CertificateError::WriteError {
        path: keystore_path.to_string(),
        message: e.to_string(),
    })?;

    info!("[CERTGEN] The keystore {keystore_path} has been generated, use it only for development reasons");
    Ok(())
}
