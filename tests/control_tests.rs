mod common;

use std::sync::Arc;
use std::time::Duration;
use tulpar_server::control::enums::control_error::ControlError;
use tulpar_server::control::enums::server_state::ServerState;
use tulpar_server::control::structs::server_control_plane::ServerControlPlane;
use tulpar_server::ssl::ssl::generate_self_signed_keystore;

fn create_control_plane(config: tulpar_server::config::structs::configuration::Configuration) -> Arc<ServerControlPlane> {
    Arc::new(ServerControlPlane::new(common::create_test_data(config)))
}

async fn wait_until_accepting(address: std::net::SocketAddr) {
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(address).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("listener on {address} never accepted a connection");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_start_stop_releases_the_port_and_restarts_on_it() {
    let dir = common::create_test_repository();
    let control = create_control_plane(common::create_test_config(dir.path()));

    let status = control.start().await.unwrap();
    assert_eq!(status.state, ServerState::Running);
    assert!(!status.tls_active);
    let address = status.bind_address.unwrap();
    assert_ne!(address.port(), 0);
    wait_until_accepting(address).await;

    control.stop().await.unwrap();
    assert_eq!(control.state(), ServerState::Stopped);
    let probe = std::net::TcpListener::bind(address).expect("port is free after stop");
    drop(probe);

    let restarted = control.start().await.unwrap();
    assert_eq!(restarted.bind_address, Some(address));
    wait_until_accepting(address).await;

    let restarted = control.restart().await.unwrap();
    assert_eq!(restarted.state, ServerState::Running);
    assert_eq!(restarted.bind_address, Some(address));

    control.stop().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_start_twice_is_refused() {
    let dir = common::create_test_repository();
    let control = create_control_plane(common::create_test_config(dir.path()));

    control.start().await.unwrap();
    assert!(matches!(control.start().await, Err(ControlError::AlreadyRunning(ServerState::Running))));
    control.stop().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_bind_failure_moves_to_failed() {
    let dir = common::create_test_repository();
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let mut config = common::create_test_config(dir.path());
    config.server.port = occupied.local_addr().unwrap().port();
    let control = create_control_plane(config);

    let result = control.start().await;
    assert!(matches!(&result, Err(error) if error.is_fatal()), "{result:?}");
    assert_eq!(control.state(), ServerState::Failed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_requests_are_served_and_logged() {
    let dir = common::create_test_repository();
    common::write_archive(dir.path(), "nano", b"archive");
    let control = create_control_plane(common::create_test_config(dir.path()));
    let address = control.start().await.unwrap().bind_address.unwrap();
    wait_until_accepting(address).await;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let body = client.get(format!("http://{address}/package/nano")).send().await.unwrap().bytes().await.unwrap();
    assert_eq!(body.as_ref(), b"archive");
    let missing = client.get(format!("http://{address}/package/missing")).send().await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::FOUND);

    let lines = control.data.request_log.recent(10);
    assert_eq!(lines, vec![
        String::from("127.0.0.1 - GET /package/nano 200"),
        String::from("127.0.0.1 - GET /package/missing 302"),
    ]);

    control.stop().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_enable_tls_restarts_through_every_state() {
    common::install_crypto_provider();
    let dir = common::create_test_repository();
    let keystore = dir.path().join("keystore.pem");
    generate_self_signed_keystore(&common::path_string(&keystore), "localhost").unwrap();
    let control = create_control_plane(common::create_test_config(dir.path()));

    let address = control.start().await.unwrap().bind_address.unwrap();
    wait_until_accepting(address).await;

    let mut transitions = control.subscribe();
    let status = control.enable_tls(&common::path_string(&keystore), "changeit", "changeit").await.unwrap();
    assert!(status.tls_active);
    assert_eq!(status.tls_address, Some(address));
    assert_eq!(status.bind_address, None);

    let mut observed = Vec::new();
    while let Ok(state) = transitions.try_recv() {
        observed.push(state);
    }
    assert_eq!(observed, vec![ServerState::Stopping, ServerState::Stopped, ServerState::Starting, ServerState::Running]);

    wait_until_accepting(address).await;
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .build()
        .unwrap();
    let response = client
        .get(format!("https://127.0.0.1:{}/api/v2.0/info?property=server.name", address.port()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "tulpar-server");

    let restarted = control.restart().await.unwrap();
    assert!(restarted.tls_active);
    assert_eq!(restarted.tls_address, Some(address));

    control.stop().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_bad_keystore_leaves_listener_running() {
    let dir = common::create_test_repository();
    let control = create_control_plane(common::create_test_config(dir.path()));
    let address = control.start().await.unwrap().bind_address.unwrap();

    let result = control.enable_tls(&common::path_string(&dir.path().join("missing.pem")), "", "").await;
    assert!(matches!(result, Err(ControlError::Certificate(_))));
    assert!(!result.unwrap_err().is_fatal());
    assert_eq!(control.state(), ServerState::Running);
    wait_until_accepting(address).await;

    control.stop().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tls_alongside_plain_listener() {
    let dir = common::create_test_repository();
    let keystore = dir.path().join("keystore.pem");
    generate_self_signed_keystore(&common::path_string(&keystore), "localhost").unwrap();
    let free = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let tls_address = free.local_addr().unwrap();
    drop(free);
    let mut config = common::create_test_config(dir.path());
    config.server.ssl_bind_address = Some(tls_address.to_string());
    let control = create_control_plane(config);

    let plain = control.start().await.unwrap().bind_address.unwrap();
    let status = control.execute_line(&format!("setupssl {} - -", common::path_string(&keystore))).await.unwrap();
    assert!(matches!(status, tulpar_server::control::enums::command_outcome::CommandOutcome::Output(_)));

    let status = control.status();
    assert_eq!(status.bind_address, Some(plain));
    assert_eq!(status.tls_address, Some(tls_address));
    wait_until_accepting(plain).await;
    wait_until_accepting(tls_address).await;

    control.stop().await.unwrap();
}
