//! The Lab Jewel storefront, served as a Spin HTTP component.
//!
//! The component only adapts Spin's request and response types; routing,
//! localization and rendering live in `jewel-site`. Pages are streamed
//! shell-first through `StreamingSink`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use jewel_site::{Site, SiteConfig, SiteRequest, SiteResponse, StreamingSink};

/// Site configuration compiled into the component.
const SITE_TOML: &str = include_str!("../site.toml");

static SITE: OnceLock<Result<Site, String>> = OnceLock::new();

/// Load the site once per component instance.
fn site() -> &'static Result<Site, String> {
    SITE.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .without_time()
            .try_init();

        let config = SiteConfig::from_toml(SITE_TOML).map_err(|e| e.to_string())?;
        Site::builtin(config).map_err(|e| e.to_string())
    })
}

/// Storefront handler.
#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    let request_id = next_request_id();

    let site = match site() {
        Ok(site) => site,
        Err(e) => {
            error!(error = %e, "site failed to load");
            send_empty(response_out, 503, &request_id);
            return;
        }
    };

    let Some(method) = http_method(&req.method()) else {
        send_empty(response_out, 405, &request_id);
        return;
    };
    let path_with_query = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let cookie = header_value(&req, "cookie");

    let body = if method == http::Method::POST {
        match req.into_body().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = ?e, "failed to read request body");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let request = SiteRequest {
        method: method.clone(),
        path_with_query: &path_with_query,
        cookie: cookie.as_deref(),
        body: &body,
    };
    let response = site.handle(&request);
    info!(
        method = %method,
        path = %path_with_query,
        status = response.status.as_u16(),
        request_id = %request_id,
        "request handled"
    );

    send(response_out, response, method == http::Method::HEAD, &request_id).await;
}

/// Write a site response, streaming the page body when there is one.
async fn send(response_out: ResponseOutparam, response: SiteResponse, head_only: bool, request_id: &str) {
    let mut header_list = response.header_list();
    header_list.push(("x-request-id".to_owned(), request_id.as_bytes().to_vec()));

    let outgoing = OutgoingResponse::new(fields(&header_list));
    if outgoing.set_status_code(response.status.as_u16()).is_err() {
        error!(status = response.status.as_u16(), "invalid status code");
    }

    let page = match response.page_body() {
        Some(page) if !head_only => page,
        _ => {
            response_out.set(outgoing);
            return;
        }
    };

    let body = outgoing.take_body();
    response_out.set(outgoing);

    let mut sink = StreamingSink::new(body);
    if let Err(e) = page.stream(&mut sink).await {
        error!(error = %e, request_id, "failed to stream page");
        return;
    }
    tracing::debug!(
        sections = sink.sections_sent().len(),
        bytes = sink.bytes_sent(),
        request_id,
        "page streamed"
    );
}

fn send_empty(response_out: ResponseOutparam, status: u16, request_id: &str) {
    let outgoing = OutgoingResponse::new(fields(&[(
        "x-request-id".to_owned(),
        request_id.as_bytes().to_vec(),
    )]));
    if outgoing.set_status_code(status).is_err() {
        error!(status, "invalid status code");
    }
    response_out.set(outgoing);
}

fn fields(list: &[(String, Vec<u8>)]) -> Fields {
    Fields::from_list(list).unwrap_or_else(|e| {
        error!(error = ?e, "rejected response headers");
        Fields::new()
    })
}

/// First value of a request header, as text.
fn header_value(req: &IncomingRequest, name: &str) -> Option<String> {
    req.headers()
        .entries()
        .into_iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, value)| String::from_utf8(value).ok())
}

fn http_method(method: &Method) -> Option<http::Method> {
    match method {
        Method::Get => Some(http::Method::GET),
        Method::Head => Some(http::Method::HEAD),
        Method::Post => Some(http::Method::POST),
        Method::Put => Some(http::Method::PUT),
        Method::Delete => Some(http::Method::DELETE),
        Method::Patch => Some(http::Method::PATCH),
        Method::Options => Some(http::Method::OPTIONS),
        Method::Connect => Some(http::Method::CONNECT),
        Method::Trace => Some(http::Method::TRACE),
        Method::Other(other) => http::Method::from_bytes(other.as_bytes()).ok(),
    }
}

/// Request id: millisecond timestamp plus a per-instance counter.
fn next_request_id() -> String {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    format!(
        "{:x}-{:04x}",
        chrono::Utc::now().timestamp_millis(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}
