use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, Service};
use actix_web::http::header::{CONTENT_DISPOSITION, ContentType, LOCATION, RETRY_AFTER};
use actix_web::web::{Bytes, Data, ServiceConfig};
use futures_util::Stream;
use log::{debug, error, info, warn};
use tokio::io::AsyncReadExt;
use crate::admission::enums::admission_decision::AdmissionDecision;
use crate::admission::enums::deny_reason::DenyReason;
use crate::common::common::{content_type_for, system_property};
use crate::http::structs::error_page_query::ErrorPageQuery;
use crate::http::structs::get_query::GetQuery;
use crate::http::structs::http_listeners::HttpListeners;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::http::structs::info_query::InfoQuery;
use crate::http::structs::list_query::ListQuery;
use crate::packages::enums::package_error::PackageError;
use crate::packages::impls::package_index::safe_relative_path;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::throttle::structs::transfer_token::TransferToken;

pub const ERROR_PAGE_REDIRECT: &str = "/errors/404.html?errorCode=404";
pub const BLOCKED_MESSAGE: &str = "IP is temporarily blocked due to excessive requests";

const CANNED_NOT_FOUND_PAGE: &str = "<!DOCTYPE html>\n<html><head><title>404 Not Found</title></head>\n<body><h1>404 Not Found</h1><p>The requested package or file does not exist.</p></body></html>\n";

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        cfg.service(web::resource("/api/v2.0/info").route(web::get().to(http_service_info)));
        cfg.service(web::resource("/api/v2.0/get").route(web::get().to(http_service_get)));
        cfg.service(web::resource("/api/v2.0/list").route(web::get().to(http_service_list)));
        cfg.service(web::resource("/package/{name}").route(web::get().to(http_service_package)));
        cfg.service(web::resource("/package/{name}/{tail:.*}").route(web::get().to(http_service_package_file)));
        cfg.service(web::resource("/errors/404.html").route(web::get().to(http_service_error_page)));
        cfg.service(web::resource("/favicon.ico").route(web::get().to(http_service_favicon)));
        cfg.service(web::resource("/").route(web::get().to(http_service_index)));
        cfg.service(web::resource("/index.html").route(web::get().to(http_service_index)));
        cfg.service(web::resource("/icons/{tail:.*}").route(web::get().to(http_service_icons)));
        cfg.service(web::resource("/static/{tail:.*}").route(web::get().to(http_service_static)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Builds and starts the listener(s). Bind failures are returned, never fatal.
pub fn http_service(
    data: Arc<HttpServiceData>,
    plain: Option<SocketAddr>,
    tls: Option<(SocketAddr, rustls::ServerConfig)>,
) -> std::io::Result<(Server, HttpListeners)>
{
    let server_config = data.config.server.clone();
    let app_data = data.clone();
    let mut server = HttpServer::new(move || {
        let log_data = app_data.clone();
        App::new()
            .wrap(http_service_cors())
            .wrap_fn(move |request, service| {
                let client = match http_service_retrieve_remote_ip(request.request(), &log_data) {
                    Ok(ip) => ip.to_string(),
                    Err(_) => String::from("-"),
                };
                let line = format!("{} - {} {}", client, request.method(), request.uri());
                let request_log = log_data.request_log.clone();
                let response = service.call(request);
                async move {
                    let response = response.await?;
                    request_log.record(format!("{} {}", line, response.status().as_u16()));
                    Ok(response)
                }
            })
            .wrap(sentry_actix::Sentry::new())
            .configure(http_service_routes(app_data.clone()))
    })
        .keep_alive(Duration::from_secs(server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(server_config.disconnect_timeout))
        .shutdown_timeout(server_config.shutdown_timeout)
        .workers(server_config.threads.max(1) as usize);

    if let Some(addr) = plain {
        info!("[HTTP] Starting server listener on {}", addr);
        server = server.bind((addr.ip(), addr.port()))?;
    }
    if let Some((addr, tls_config)) = tls {
        info!("[HTTP] Starting server listener with SSL on {}", addr);
        server = server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?;
    }

    let mut listeners = HttpListeners::default();
    for (address, scheme) in server.addrs_with_scheme() {
        match scheme {
            "https" => listeners.tls = Some(address),
            _ => listeners.plain = Some(address)
        }
    }

    Ok((server.disable_signals().run(), listeners))
}

pub async fn http_service_info(request: HttpRequest, query: web::Query<InfoQuery>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    if let Err(response) = http_service_admit(&request, &data) {
        return response;
    }

    match query.property.as_deref().filter(|property| !property.is_empty()).and_then(system_property) {
        None => HttpResponse::NotFound().content_type(ContentType::plaintext()).body("Property not found."),
        Some(value) => HttpResponse::Ok().content_type(ContentType::plaintext()).body(value)
    }
}

pub async fn http_service_get(request: HttpRequest, query: web::Query<GetQuery>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_service_admit(&request, &data) {
        Ok(ip) => ip,
        Err(response) => return response
    };

    let package = match query.package.as_deref() {
        Some(package) if !package.is_empty() => package,
        _ => {
            return HttpResponse::BadRequest().content_type(ContentType::plaintext()).body("Package parameter is required.");
        }
    };

    match query.path.as_deref().filter(|path| !path.is_empty()) {
        None => match data.index.archive_path(package) {
            Ok(archive) => http_service_download(ip, archive, &data).await,
            Err(error) => http_service_redirect_not_found(&data, &error)
        },
        Some(path) => match data.index.package_file(package, path) {
            Ok(file) => http_service_view(file, &data).await,
            Err(error) => http_service_redirect_not_found(&data, &error)
        }
    }
}

pub async fn http_service_list(request: HttpRequest, query: web::Query<ListQuery>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    if let Err(response) = http_service_admit(&request, &data) {
        return response;
    }

    match query.package.as_deref().filter(|package| !package.is_empty()) {
        None => match data.index.list_all() {
            Ok(listings) => {
                data.stats.update_stats(StatsEvent::ListingsServed, 1);
                HttpResponse::Ok().json(listings)
            }
            Err(error) => http_service_package_error(&data, error)
        },
        Some(package) => match data.index.detail(package) {
            Ok(detail) => {
                data.stats.update_stats(StatsEvent::DetailsServed, 1);
                HttpResponse::Ok().json(detail)
            }
            Err(error) => http_service_package_error(&data, error)
        }
    }
}

pub async fn http_service_package(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_service_admit(&request, &data) {
        Ok(ip) => ip,
        Err(response) => return response
    };

    let name = path.into_inner();
    http_service_package_archive(ip, &name, &data).await
}

pub async fn http_service_package_file(request: HttpRequest, path: web::Path<(String, String)>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_service_admit(&request, &data) {
        Ok(ip) => ip,
        Err(response) => return response
    };

    let (name, tail) = path.into_inner();
    if tail.is_empty() {
        return http_service_package_archive(ip, &name, &data).await;
    }
    match data.index.package_file(&name, &tail) {
        Ok(file) => http_service_view(file, &data).await,
        Err(error) => http_service_redirect_not_found(&data, &error)
    }
}

pub async fn http_service_error_page(query: web::Query<ErrorPageQuery>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    match query.error_code.as_deref() {
        Some("404") => {
            let page = Path::new(&data.config.paths.errors_dir).join("404.html");
            match tokio::fs::read(&page).await {
                Ok(content) => HttpResponse::NotFound().content_type(ContentType::html()).body(content),
                Err(_) => HttpResponse::NotFound().content_type(ContentType::html()).body(CANNED_NOT_FOUND_PAGE)
            }
        }
        _ => HttpResponse::BadRequest().content_type(ContentType::plaintext()).body("Unknown error code.")
    }
}

pub async fn http_service_favicon(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    if let Err(response) = http_service_admit(&request, &data) {
        return response;
    }

    let favicon = Path::new(&data.config.paths.static_dir).join(&data.config.paths.favicon);
    http_service_static_file(&favicon, "Favicon not found.", &data).await
}

pub async fn http_service_index(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    if let Err(response) = http_service_admit(&request, &data) {
        return response;
    }

    let index = Path::new(&data.config.paths.static_dir).join(&data.config.paths.index);
    http_service_static_file(&index, "Index page not found.", &data).await
}

pub async fn http_service_icons(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    if let Err(response) = http_service_admit(&request, &data) {
        return response;
    }

    match safe_relative_path(&path.into_inner()) {
        None => http_service_plain_not_found(&data, "Icon not found."),
        Some(relative) => {
            let icon = Path::new(&data.config.paths.icons_dir).join(relative);
            http_service_static_file(&icon, "Icon not found.", &data).await
        }
    }
}

pub async fn http_service_static(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    if let Err(response) = http_service_admit(&request, &data) {
        return response;
    }

    match safe_relative_path(&path.into_inner()) {
        None => http_service_plain_not_found(&data, "Static file not found."),
        Some(relative) => {
            let file = Path::new(&data.config.paths.static_dir).join(relative);
            http_service_static_file(&file, "Static file not found.", &data).await
        }
    }
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    debug!("[HTTP] No route for {}", request.uri());
    http_service_plain_not_found(&data, "Not found.")
}

/// Client identity: the peer address, or the configured real-ip header.
/// With a header configured, a request without a parseable value has no origin.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, ()>
{
    let Some(header_name) = data.config.server.real_ip.as_deref().filter(|name| !name.is_empty()) else {
        return request.peer_addr().map(|addr| addr.ip()).ok_or(());
    };
    match request.headers().get(header_name) {
        Some(header) => match header.to_str() {
            Ok(value) => IpAddr::from_str(value.trim()).map_err(|_| ()),
            Err(_) => Err(())
        },
        None => Err(())
    }
}

/// Resolves the client and runs it through admission control; the error
/// side is the response to send instead of serving the request.
pub fn http_service_admit(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, HttpResponse>
{
    let ip = match http_service_retrieve_remote_ip(request, data) {
        Ok(ip) => ip,
        Err(_) => {
            return Err(HttpResponse::BadRequest().content_type(ContentType::plaintext()).body("unknown origin ip"));
        }
    };

    match data.admission.admit(&ip.to_string(), Instant::now()) {
        AdmissionDecision::Allow => {
            data.stats.update_stats(StatsEvent::RequestsAdmitted, 1);
            Ok(ip)
        }
        AdmissionDecision::Deny { reason, retry_after } => {
            match reason {
                DenyReason::RateLimited => data.stats.update_stats(StatsEvent::RequestsRateLimited, 1),
                DenyReason::Blocked => {
                    debug!("[ADMISSION] {} denied: {}", ip, reason);
                    data.stats.update_stats(StatsEvent::RequestsBlocked, 1);
                }
            }
            let mut response = HttpResponse::TooManyRequests();
            response.content_type(ContentType::plaintext());
            if let Some(retry_after) = retry_after {
                response.insert_header((RETRY_AFTER, retry_after_seconds(retry_after).to_string()));
            }
            Err(response.body(BLOCKED_MESSAGE))
        }
    }
}

/// Whole seconds, rounded up.
pub fn retry_after_seconds(retry_after: Duration) -> u64
{
    let millis = retry_after.as_millis() as u64;
    millis.div_ceil(1000).max(1)
}

async fn http_service_package_archive(ip: IpAddr, name: &str, data: &HttpServiceData) -> HttpResponse
{
    if let Ok(archive) = data.index.root_archive_path(name) {
        return http_service_download(ip, archive, data).await;
    }
    match data.index.archive_path(name) {
        Ok(archive) => http_service_download(ip, archive, data).await,
        Err(error) => http_service_redirect_not_found(data, &error)
    }
}

/// Streams `path` as an attachment while holding a transfer slot for `ip`.
pub async fn http_service_download(ip: IpAddr, path: PathBuf, data: &HttpServiceData) -> HttpResponse
{
    let token = match data.throttle.acquire(&ip.to_string()) {
        Ok(token) => token,
        Err(error) => {
            info!("[THROTTLE] {} refused: {}", ip, error);
            data.stats.update_stats(StatsEvent::DownloadsRejected, 1);
            return HttpResponse::TooManyRequests().content_type(ContentType::plaintext()).body(error.to_string());
        }
    };

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(error) => {
            warn!("[HTTP] Unable to open {}: {}", path.display(), error);
            token.release();
            return HttpResponse::Found().insert_header((LOCATION, ERROR_PAGE_REDIRECT)).finish();
        }
    };
    let length = match file.metadata().await {
        Ok(metadata) => Some(metadata.len()),
        Err(_) => None
    };

    let file_name = path.file_name()
        .map(|name| name.to_string_lossy().replace('"', ""))
        .unwrap_or_default();
    info!("[HTTP] {} downloading {}", ip, path.display());
    data.stats.update_stats(StatsEvent::DownloadsStarted, 1);

    let stream = http_service_file_stream(
        file,
        data.config.server.buffer_size,
        Some(token),
        data.stats.clone(),
        path.display().to_string(),
    );
    let mut response = HttpResponse::Ok();
    response.content_type("application/octet-stream");
    response.insert_header((CONTENT_DISPOSITION, format!("attachment; filename=\"{file_name}\"")));
    if let Some(length) = length {
        response.no_chunking(length);
    }
    response.streaming(stream)
}

/// Serves `path` inline with a content type guessed from its extension. Not paced.
pub async fn http_service_view(path: PathBuf, data: &HttpServiceData) -> HttpResponse
{
    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(error) => {
            warn!("[HTTP] Unable to open {}: {}", path.display(), error);
            return HttpResponse::Found().insert_header((LOCATION, ERROR_PAGE_REDIRECT)).finish();
        }
    };
    data.stats.update_stats(StatsEvent::FilesViewed, 1);
    let content_type = content_type_for(&path);
    let stream = http_service_file_stream(
        file,
        data.config.server.buffer_size,
        None,
        data.stats.clone(),
        path.display().to_string(),
    );
    HttpResponse::Ok().content_type(content_type).streaming(stream)
}

struct FileStreamState {
    file: tokio::fs::File,
    buffer: Vec<u8>,
    token: Option<TransferToken>,
    stats: Arc<StatsAtomics>,
    label: String,
    finished: bool,
}

/// Reads `file` in `buffer_size` chunks. With a token every chunk is paced
/// first, and the token is released once the stream ends or fails.
pub fn http_service_file_stream(
    file: tokio::fs::File,
    buffer_size: usize,
    token: Option<TransferToken>,
    stats: Arc<StatsAtomics>,
    label: String,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> + 'static
{
    let state = FileStreamState {
        file,
        buffer: vec![0u8; buffer_size.max(1)],
        token,
        stats,
        label,
        finished: false,
    };
    futures_util::stream::unfold(state, |mut state| async move {
        if state.finished {
            return None;
        }
        match state.file.read(&mut state.buffer).await {
            Ok(0) => {
                state.finished = true;
                if let Some(token) = state.token.take() {
                    debug!("[HTTP] Finished sending {}", state.label);
                    state.stats.update_stats(StatsEvent::DownloadsCompleted, 1);
                    token.release();
                }
                None
            }
            Ok(read) => {
                if let Some(token) = &state.token {
                    token.pace(read as u64).await;
                }
                state.stats.update_stats(StatsEvent::BytesSent, read as i64);
                let chunk = Bytes::copy_from_slice(&state.buffer[..read]);
                Some((Ok(chunk), state))
            }
            Err(error) => {
                error!("[HTTP] Transfer of {} failed: {}", state.label, error);
                sentry::capture_message(&format!("Transfer of {} failed: {}", state.label, error), sentry::Level::Error);
                state.finished = true;
                if let Some(token) = state.token.take() {
                    state.stats.update_stats(StatsEvent::DownloadsFailed, 1);
                    token.release();
                }
                Some((Err(error), state))
            }
        }
    })
}

async fn http_service_static_file(path: &Path, missing: &str, data: &HttpServiceData) -> HttpResponse
{
    match tokio::fs::read(path).await {
        Ok(content) => {
            HttpResponse::Ok().content_type(content_type_for(path)).body(content)
        }
        Err(_) => http_service_plain_not_found(data, missing)
    }
}

fn http_service_plain_not_found(data: &HttpServiceData, message: &str) -> HttpResponse
{
    data.stats.update_stats(StatsEvent::NotFound, 1);
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(message.to_string())
}

fn http_service_redirect_not_found(data: &HttpServiceData, error: &PackageError) -> HttpResponse
{
    info!("[HTTP] {}, redirecting to the error page", error);
    data.stats.update_stats(StatsEvent::NotFound, 1);
    HttpResponse::Found().insert_header((LOCATION, ERROR_PAGE_REDIRECT)).finish()
}

fn http_service_package_error(data: &HttpServiceData, error: PackageError) -> HttpResponse
{
    match error {
        PackageError::RootNotFound => {
            warn!("[PACKAGES] Packages directory {} not found", data.index.root.display());
            http_service_plain_not_found(data, "Packages directory not found.")
        }
        error => {
            error!("[PACKAGES] {}", error);
            HttpResponse::InternalServerError().content_type(ContentType::plaintext()).body(error.to_string())
        }
    }
}
