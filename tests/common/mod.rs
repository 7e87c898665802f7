#![allow(dead_code)]
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tulpar_server::config::structs::configuration::Configuration;
use tulpar_server::http::structs::http_service_data::HttpServiceData;

pub type TestData = Arc<HttpServiceData>;

/// Configuration rooted in `dir`: packages under `package/`, static files
/// under `static/`, listener on an ephemeral loopback port.
pub fn create_test_config(dir: &Path) -> Configuration {
    let mut config = Configuration::init();
    config.log_file = None;
    config.server.address = String::from("127.0.0.1");
    config.server.port = 0;
    config.server.threads = 1;
    config.server.shutdown_timeout = 1;
    config.server.buffer_size = 64;
    config.server.max_download_speed = 0;
    config.paths.packages = path_string(&dir.join("package"));
    config.paths.static_dir = path_string(&dir.join("static"));
    config.paths.icons_dir = path_string(&dir.join("icons"));
    config.paths.errors_dir = path_string(&dir.join("errors"));
    config
}

pub fn create_test_data(config: Configuration) -> TestData {
    Arc::new(HttpServiceData::new(Arc::new(config)))
}

pub fn create_test_repository() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("package")).unwrap();
    dir
}

pub fn path_string(path: &Path) -> String {
    path.display().to_string()
}

pub fn write_metadata(root: &Path, directory: &str, name: &str, version: &str, release: i64, architecture: &str) {
    let package_dir = root.join("package").join(directory);
    std::fs::create_dir_all(&package_dir).unwrap();
    std::fs::write(
        package_dir.join("metadata.json"),
        format!(r#"{{"name":"{name}","version":"{version}","release":{release},"architecture":"{architecture}"}}"#),
    ).unwrap();
}

/// `<root>/package/<directory>/download/<directory>.apg`
pub fn write_archive(root: &Path, directory: &str, content: &[u8]) -> PathBuf {
    let download_dir = root.join("package").join(directory).join("download");
    std::fs::create_dir_all(&download_dir).unwrap();
    let archive = download_dir.join(format!("{directory}.apg"));
    std::fs::write(&archive, content).unwrap();
    archive
}

pub fn archive_bytes(length: usize) -> Vec<u8> {
    (0..length).map(|index| (index % 251) as u8).collect()
}

pub fn client(last_octet: u8) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, last_octet)), 40000 + last_octet as u16)
}

/// The server pins ring itself; test clients rely on the process default.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
