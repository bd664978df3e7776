//! JSON server over the content tree.
//!
//! Built on `tiny_http`. Every request gets a fresh [`Site`], so listings are
//! memoised within a request and never across requests.
//!
//! # Endpoints
//!
//! | Method | Path                              | Response                                |
//! |--------|-----------------------------------|-----------------------------------------|
//! | GET    | `/api`                            | site title and canonical URL            |
//! | GET    | `/api/routes`                     | route map                               |
//! | GET    | `/api/navigation`                 | main navigation                         |
//! | GET    | `/api/work`                       | all work as cards, featured first       |
//! | GET    | `/api/work/{sub}/{slug}`          | item + neighbours, `401` when locked    |
//! | POST   | `/api/work/{sub}/{slug}/unlock`   | `AuthResult`, sets the unlock cookie    |
//! | POST   | `/api/logout`                     | clears every unlock cookie              |
//! | GET    | `/api/pages/{slug}`               | standalone page                         |
//! | GET    | `/api/now`                        | now entries, newest first               |
//! | GET    | `/api/now/latest`                 | latest now entry                        |

use crate::{
    auth::{
        AccessState, CookieJar, Gate, INTERNAL_ERROR_MESSAGE, RequestCookies, SecretSource,
        clear_all_auth_cookies,
    },
    config::{BaseConfig, cfg},
    content::{ContentError, Site},
    log,
    logger::log_error,
    resolve::{company_display_name, navigation, routes, work_type_label},
    work::{Adjacent, WorkItem},
};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::{Value, json};
use std::{
    io::{Cursor, Read},
    net::SocketAddr,
    sync::Arc,
};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Upper bound on accepted request bodies (unlock forms are tiny)
const MAX_BODY_BYTES: u64 = 16 * 1024;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the JSON server. Blocks until Ctrl+C.
pub fn serve_site() -> Result<()> {
    let c = cfg();
    let (server, addr) = try_bind_port(c.serve.addr(), MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(base: SocketAddr, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let base_port = base.port();
    let mut last_error = None;
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(base.ip(), port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map_or_else(|| "no attempt made".to_owned(), |e| e.to_string())
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// A response before it is written to the socket.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
    pub set_cookies: Vec<String>,
}

impl ApiResponse {
    fn json(status: u16, body: impl Serialize) -> Self {
        let body = serde_json::to_value(body).unwrap_or_else(|e| json!({ "error": e.to_string() }));
        Self {
            status,
            body,
            set_cookies: Vec::new(),
        }
    }

    fn ok(body: impl Serialize) -> Self {
        Self::json(200, body)
    }

    fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }))
    }

    fn not_found() -> Self {
        Self::error(404, "Not found")
    }

    fn with_cookies(mut self, jar: &RequestCookies) -> Self {
        self.set_cookies = jar.set_cookie_headers().collect();
        self
    }
}

/// Read one request, dispatch it with a fresh `Site`, write the response.
fn handle_request(mut request: Request) -> Result<()> {
    let config = cfg();
    let site = Site::from_config(&config);
    let gate = Gate::from_config(&config);

    let raw_path = request.url().split('?').next().unwrap_or_default();
    let path = urlencoding::decode(raw_path)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| raw_path.to_owned());

    let cookie_header = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Cookie"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    let mut body = String::new();
    if *request.method() == Method::Post {
        request
            .as_reader()
            .take(MAX_BODY_BYTES)
            .read_to_string(&mut body)
            .context("Failed to read request body")?;
    }

    let method = request.method().clone();
    let response = dispatch(&config.base, &site, &gate, &method, &path, &cookie_header, &body);
    log!("serve"; "{} {} -> {}", method, path, response.status);

    respond(request, response)
}

/// Route a request to its handler.
pub fn dispatch<S: SecretSource>(
    base: &BaseConfig,
    site: &Site,
    gate: &Gate<S>,
    method: &Method,
    path: &str,
    cookie_header: &str,
    body: &str,
) -> ApiResponse {
    let mut jar = RequestCookies::parse(cookie_header);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    let result = match (method, segments.as_slice()) {
        (Method::Get, ["api"]) => Ok(ApiResponse::ok(json!({
            "title": base.title,
            "url": base.url,
        }))),
        (Method::Get, ["api", "routes"]) => Ok(ApiResponse::ok(routes())),
        (Method::Get, ["api", "navigation"]) => Ok(ApiResponse::ok(navigation())),
        (Method::Get, ["api", "work"]) => work_listing(site, gate, &jar),
        (Method::Get, ["api", "work", sub, slug]) => work_detail(site, gate, &jar, sub, slug),
        (Method::Post, ["api", "work", sub, slug, "unlock"]) => {
            let password = form_value(body, "password").unwrap_or_default();
            let result = gate.authenticate(site, &mut jar, sub, slug, &password);
            let status = if result.success { 200 } else { 401 };
            Ok(ApiResponse::json(status, result).with_cookies(&jar))
        }
        (Method::Post, ["api", "logout"]) => {
            let cleared = clear_all_auth_cookies(&mut jar, &gate.options);
            Ok(ApiResponse::ok(json!({ "cleared": cleared })).with_cookies(&jar))
        }
        (Method::Get, ["api", "pages", slug]) => site
            .page(slug)
            .map(|page| page.map_or_else(ApiResponse::not_found, |page| ApiResponse::ok(page))),
        (Method::Get, ["api", "now"]) => site.now_entries().map(|entries| ApiResponse::ok(&*entries)),
        (Method::Get, ["api", "now", "latest"]) => site
            .latest_now()
            .map(|entry| entry.map_or_else(ApiResponse::not_found, |entry| ApiResponse::ok(entry))),
        _ => Ok(ApiResponse::not_found()),
    };

    result.unwrap_or_else(|err| {
        log_error(&format!("{method} {path}"), &err);
        ApiResponse::error(500, INTERNAL_ERROR_MESSAGE)
    })
}

/// Work item as shown on listing cards. Never carries the body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkCard<'a> {
    slug: &'a str,
    sub_type: &'a str,
    route: String,
    title: &'a str,
    description: &'a str,
    company: &'a str,
    work_type: &'a str,
    year: Option<&'a str>,
    date: Option<&'a str>,
    featured: bool,
    hero_image: &'a str,
    tags: &'a [String],
    access: AccessState,
}

impl<'a> WorkCard<'a> {
    fn new<S: SecretSource>(item: &'a WorkItem, gate: &Gate<S>, jar: &impl CookieJar) -> Self {
        let fm = &item.frontmatter;
        Self {
            slug: &item.slug,
            sub_type: item.sub_type,
            route: item.route(),
            title: &fm.title,
            description: &fm.description,
            company: company_display_name(&fm.company),
            work_type: work_type_label(&fm.work_type),
            year: fm.year.as_deref(),
            date: fm.date.as_deref(),
            featured: fm.featured,
            hero_image: &fm.hero_image,
            tags: &fm.tags,
            access: gate.access_state(&item.item, jar),
        }
    }
}

fn work_listing<S: SecretSource>(
    site: &Site,
    gate: &Gate<S>,
    jar: &RequestCookies,
) -> Result<ApiResponse, ContentError> {
    let all = site.all_work()?;
    let cards: Vec<_> = all.iter().map(|item| WorkCard::new(item, gate, jar)).collect();
    Ok(ApiResponse::ok(cards))
}

fn work_detail<S: SecretSource>(
    site: &Site,
    gate: &Gate<S>,
    jar: &RequestCookies,
    sub: &str,
    slug: &str,
) -> Result<ApiResponse, ContentError> {
    let Some(item) = site.work_item(sub, slug)? else {
        return Ok(ApiResponse::not_found());
    };

    let card = WorkCard::new(&item, gate, jar);
    if !card.access.can_view() {
        return Ok(ApiResponse::json(401, json!({ "locked": true, "item": card })));
    }

    let Adjacent { prev, next } = site.adjacent_work_item(sub, slug)?;
    let prev = prev.as_ref().map(|p| WorkCard::new(p, gate, jar));
    let next = next.as_ref().map(|n| WorkCard::new(n, gate, jar));

    Ok(ApiResponse::ok(json!({
        "item": item,
        "card": card,
        "adjacent": { "prev": prev, "next": next },
    })))
}

/// Value of `key` in an `application/x-www-form-urlencoded` body.
fn form_value(body: &str, key: &str) -> Option<String> {
    body.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k != key {
            return None;
        }
        let v = v.replace('+', " ");
        urlencoding::decode(&v).ok().map(std::borrow::Cow::into_owned)
    })
}

// ============================================================================
// Response Helpers
// ============================================================================

fn respond(request: Request, response: ApiResponse) -> Result<()> {
    let body = serde_json::to_vec(&response.body)?;
    let mut headers = vec![header("Content-Type", "application/json; charset=utf-8")?];
    for cookie in &response.set_cookies {
        headers.push(header("Set-Cookie", cookie)?);
    }

    let length = body.len();
    let response = Response::new(
        StatusCode(response.status),
        headers,
        Cursor::new(body),
        Some(length),
        None,
    );
    request.respond(response)?;
    Ok(())
}

fn header(field: &str, value: &str) -> Result<Header> {
    Header::from_bytes(field.as_bytes(), value.as_bytes())
        .map_err(|()| anyhow!("Invalid header {field}: {value}"))
}
