//! TLS material for the HTTPS connector.
//!
//! The operator enables TLS with
//! `setupssl <keystorePath> <keystorePassword> <keyManagerPassword>`. The
//! keystore is a PEM file holding the certificate chain followed by the
//! private key (PKCS#8, PKCS#1 or SEC1). It is loaded and validated before
//! the running listener is touched.
//!
//! A development keystore can be generated with `--create-selfsigned`.

/// Certificate errors.
pub mod enums;

/// Loaded keystore contents.
pub mod structs;

/// Implementation blocks for keystore loading.
pub mod impls;

/// Server configuration building and self-signed generation.
#[allow(clippy::module_inception)]
pub mod ssl;
