/// Certificate chain and private key read from a keystore.
pub mod certificate_bundle;
