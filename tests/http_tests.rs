mod common;

use std::time::{Duration, Instant};
use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION, RETRY_AFTER};
use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::json;
use tulpar_server::http::http::{http_service_cors, http_service_routes, BLOCKED_MESSAGE, ERROR_PAGE_REDIRECT};

#[actix_web::test]
async fn test_list_returns_every_package_directory() {
    let dir = common::create_test_repository();
    common::write_metadata(dir.path(), "nano", "nano", "1.0", 1, "x86_64");
    common::write_archive(dir.path(), "nano", b"archive");
    common::write_metadata(dir.path(), "bash", "bash", "5.2", 3, "x86_64");
    let data = common::create_test_data(common::create_test_config(dir.path()));

    let app = test::init_service(
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone())),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v2.0/list").peer_addr(common::client(1)).to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!([
        {"name": "bash", "files": {"metadata.json": "file"}},
        {"name": "nano", "files": {"download": "directory", "metadata.json": "file"}}
    ]));
    assert_eq!(data.stats.get_stats().listings_served, 1);
}

#[actix_web::test]
async fn test_list_distinguishes_missing_and_empty_root() {
    let dir = tempfile::TempDir::new().unwrap();
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    let req = test::TestRequest::get().uri("/api/v2.0/list").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test::read_body(resp).await, "Packages directory not found.");

    std::fs::create_dir_all(dir.path().join("package")).unwrap();
    let req = test::TestRequest::get().uri("/api/v2.0/list").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "[]");
}

#[actix_web::test]
async fn test_detail_groups_by_architecture() {
    let dir = common::create_test_repository();
    common::write_metadata(dir.path(), "nano-1.2-1", "nano", "1.2", 1, "x86_64");
    common::write_metadata(dir.path(), "nano-1.10-0", "nano", "1.10", 0, "x86_64");
    common::write_metadata(dir.path(), "nano-arm", "Nano", "2.0", 1, "aarch64");
    common::write_metadata(dir.path(), "vim", "vim", "9.1", 1, "x86_64");
    std::fs::create_dir_all(dir.path().join("package").join("broken")).unwrap();
    std::fs::write(dir.path().join("package").join("broken").join("metadata.json"), "{ not json").unwrap();
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    let req = test::TestRequest::get().uri("/api/v2.0/list?package=nano").peer_addr(common::client(1)).to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({
        "package": "nano",
        "architectures": {
            "aarch64": {
                "latest": "2.0-1",
                "versions": {"2.0-1": "repo.nuros.org/packages/Nano-2.0-1-aarch64.apg"}
            },
            "x86_64": {
                "latest": "1.2-1",
                "versions": {
                    "1.10-0": "repo.nuros.org/packages/nano-1.10-0-x86_64.apg",
                    "1.2-1": "repo.nuros.org/packages/nano-1.2-1-x86_64.apg"
                }
            }
        }
    }));

    let req = test::TestRequest::get().uri("/api/v2.0/list?package=emacs").peer_addr(common::client(1)).to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"package": "emacs", "architectures": {}}));
}

#[actix_web::test]
async fn test_download_streams_archive_and_releases_slot() {
    let dir = common::create_test_repository();
    common::write_metadata(dir.path(), "nano", "nano", "1.0", 1, "x86_64");
    let content = common::archive_bytes(1000);
    common::write_archive(dir.path(), "nano", &content);
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    for uri in ["/package/nano", "/api/v2.0/get?package=nano", "/package/nano/"] {
        let req = test::TestRequest::get().uri(uri).peer_addr(common::client(1)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/octet-stream");
        assert_eq!(resp.headers().get(CONTENT_DISPOSITION).unwrap(), "attachment; filename=\"nano.apg\"");
        assert_eq!(test::read_body(resp).await.as_ref(), content.as_slice());
        assert_eq!(data.throttle.active_sessions("10.0.0.1"), 0);
    }

    let stats = data.stats.get_stats();
    assert_eq!(stats.downloads_started, 3);
    assert_eq!(stats.downloads_completed, 3);
    assert_eq!(stats.bytes_sent, 3000);
    assert_eq!(data.throttle.tracked_clients(), 0);
}

#[actix_web::test]
async fn test_download_of_root_archive() {
    let dir = common::create_test_repository();
    std::fs::write(dir.path().join("package").join("legacy-1.0.apg"), b"legacy").unwrap();
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    let req = test::TestRequest::get().uri("/package/legacy-1.0.apg").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_DISPOSITION).unwrap(), "attachment; filename=\"legacy-1.0.apg\"");
    assert_eq!(test::read_body(resp).await, "legacy");
}

#[actix_web::test]
async fn test_download_is_paced() {
    let dir = common::create_test_repository();
    let content = common::archive_bytes(6000);
    common::write_archive(dir.path(), "big", &content);
    let mut config = common::create_test_config(dir.path());
    config.server.max_download_speed = 4096;
    config.server.buffer_size = 1024;
    let data = common::create_test_data(config);
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    let started = Instant::now();
    let req = test::TestRequest::get().uri("/package/big").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(test::read_body(resp).await.len(), 6000);
    assert!(started.elapsed() >= Duration::from_millis(900), "took {:?}", started.elapsed());
}

#[actix_web::test]
async fn test_view_package_file_with_probed_type() {
    let dir = common::create_test_repository();
    common::write_metadata(dir.path(), "nano", "nano", "1.0", 1, "x86_64");
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    for uri in ["/package/nano/metadata.json", "/api/v2.0/get?package=nano&path=metadata.json"] {
        let req = test::TestRequest::get().uri(uri).peer_addr(common::client(1)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(resp.headers().get(CONTENT_DISPOSITION).is_none());
    }
    assert_eq!(data.throttle.tracked_clients(), 0);
    assert_eq!(data.stats.get_stats().files_viewed, 2);
}

#[actix_web::test]
async fn test_misses_redirect_to_error_page() {
    let dir = common::create_test_repository();
    common::write_metadata(dir.path(), "nano", "nano", "1.0", 1, "x86_64");
    std::fs::write(dir.path().join("secret.txt"), "secret").unwrap();
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    for uri in [
        "/package/missing",
        "/package/nano",
        "/package/nano/missing.txt",
        "/api/v2.0/get?package=missing",
        "/api/v2.0/get?package=nano&path=../../secret.txt",
        "/api/v2.0/get?package=..&path=secret.txt",
    ] {
        let req = test::TestRequest::get().uri(uri).peer_addr(common::client(1)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(resp.headers().get(LOCATION).unwrap(), ERROR_PAGE_REDIRECT, "{uri}");
    }
}

#[actix_web::test]
async fn test_get_requires_package_parameter() {
    let dir = common::create_test_repository();
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    let req = test::TestRequest::get().uri("/api/v2.0/get").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "Package parameter is required.");
}

#[actix_web::test]
async fn test_rate_limit_rejects_with_retry_after() {
    let dir = common::create_test_repository();
    let mut config = common::create_test_config(dir.path());
    config.server.max_requests = 3;
    let data = common::create_test_data(config);
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    for _ in 0..3 {
        let req = test::TestRequest::get().uri("/api/v2.0/list").peer_addr(common::client(1)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/v2.0/list").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(resp.headers().get(RETRY_AFTER).unwrap(), "60");
    assert_eq!(test::read_body(resp).await, BLOCKED_MESSAGE);

    let req = test::TestRequest::get().uri("/package/nano").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let retry_after: u64 = resp.headers().get(RETRY_AFTER).unwrap().to_str().unwrap().parse().unwrap();
    assert!((59..=60).contains(&retry_after));

    let req = test::TestRequest::get().uri("/api/v2.0/list").peer_addr(common::client(2)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/errors/404.html?errorCode=404").peer_addr(common::client(1)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let stats = data.stats.get_stats();
    assert_eq!(stats.requests_admitted, 4);
    assert_eq!(stats.requests_rate_limited, 1);
    assert_eq!(stats.requests_blocked, 1);
}

#[actix_web::test]
async fn test_operator_ban_has_no_retry_after() {
    let dir = common::create_test_repository();
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    data.admission.ban("10.0.0.1", Instant::now());
    let req = test::TestRequest::get().uri("/").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(resp.headers().get(RETRY_AFTER).is_none());

    data.admission.unban("10.0.0.1", Instant::now());
    let req = test::TestRequest::get().uri("/").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test::read_body(resp).await, "Index page not found.");
}

#[actix_web::test]
async fn test_concurrent_download_cap() {
    let dir = common::create_test_repository();
    common::write_archive(dir.path(), "nano", b"archive");
    let mut config = common::create_test_config(dir.path());
    config.server.max_downloads_per_ip = 1;
    let data = common::create_test_data(config);
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    let held = data.throttle.acquire("10.0.0.1").unwrap();
    let req = test::TestRequest::get().uri("/package/nano").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(test::read_body(resp).await, "Maximum downloads reached.");
    assert_eq!(data.throttle.active_sessions("10.0.0.1"), 1);

    let req = test::TestRequest::get().uri("/package/nano").peer_addr(common::client(2)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    held.release();
    let req = test::TestRequest::get().uri("/package/nano").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "archive");
    assert_eq!(data.stats.get_stats().downloads_rejected, 1);
}

#[actix_web::test]
async fn test_error_page() {
    let dir = common::create_test_repository();
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    let req = test::TestRequest::get().uri("/errors/404.html?errorCode=404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(String::from_utf8_lossy(&test::read_body(resp).await).contains("404 Not Found"));

    std::fs::create_dir_all(dir.path().join("errors")).unwrap();
    std::fs::write(dir.path().join("errors").join("404.html"), "<p>custom</p>").unwrap();
    let req = test::TestRequest::get().uri("/errors/404.html?errorCode=404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(test::read_body(resp).await, "<p>custom</p>");

    let req = test::TestRequest::get().uri("/errors/404.html?errorCode=500").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "Unknown error code.");
}

#[actix_web::test]
async fn test_info_and_static_routes() {
    let dir = common::create_test_repository();
    std::fs::create_dir_all(dir.path().join("static")).unwrap();
    std::fs::write(dir.path().join("static").join("index.html"), "<h1>repo</h1>").unwrap();
    std::fs::write(dir.path().join("static").join("app.css"), "body {}").unwrap();
    std::fs::create_dir_all(dir.path().join("icons")).unwrap();
    std::fs::write(dir.path().join("icons").join("nano.png"), [137u8, 80, 78, 71]).unwrap();
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    let req = test::TestRequest::get().uri("/api/v2.0/info?property=os.arch").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, std::env::consts::ARCH);

    for uri in ["/api/v2.0/info", "/api/v2.0/info?property=java.home"] {
        let req = test::TestRequest::get().uri(uri).peer_addr(common::client(1)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let req = test::TestRequest::get().uri("/").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "text/html; charset=utf-8");
    assert_eq!(test::read_body(resp).await, "<h1>repo</h1>");

    let req = test::TestRequest::get().uri("/static/app.css").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "text/css; charset=utf-8");

    let req = test::TestRequest::get().uri("/icons/nano.png").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "image/png");

    let req = test::TestRequest::get().uri("/icons/missing.png").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test::read_body(resp).await, "Icon not found.");

    let req = test::TestRequest::get().uri("/favicon.ico").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(test::read_body(resp).await, "Favicon not found.");

    let req = test::TestRequest::get().uri("/nowhere").peer_addr(common::client(1)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_request_without_origin_is_rejected() {
    let dir = common::create_test_repository();
    let data = common::create_test_data(common::create_test_config(dir.path()));
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    let req = test::TestRequest::get().uri("/api/v2.0/list").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "unknown origin ip");
}

#[actix_web::test]
async fn test_proxy_header_identifies_clients() {
    let dir = common::create_test_repository();
    let mut config = common::create_test_config(dir.path());
    config.server.real_ip = Some(String::from("X-Real-IP"));
    config.server.max_requests = 1;
    let data = common::create_test_data(config);
    let app = test::init_service(App::new().configure(http_service_routes(data.clone()))).await;

    // every request arrives from the proxy, the header tells clients apart
    for client in ["192.168.1.20", "192.168.1.21"] {
        let req = test::TestRequest::get()
            .uri("/api/v2.0/list")
            .peer_addr(common::client(1))
            .insert_header(("X-Real-IP", client))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/v2.0/list").peer_addr(common::client(1)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "unknown origin ip");
    assert!(!data.admission.is_blocked(&common::client(1).ip().to_string(), Instant::now()));
}
