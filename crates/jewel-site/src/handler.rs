//! Request handling.
//!
//! [`Site`] owns everything loaded once at startup (config, catalog, string
//! tables, link builder) and turns a platform-neutral [`SiteRequest`] into a
//! [`SiteResponse`]. Per request it builds a [`LocaleProvider`] over the
//! request's cookies and hands the resulting locale to the sections through
//! a [`ViewContext`].

use std::sync::Arc;

use chrono::Datelike;
use http::header::{CONTENT_LANGUAGE, VARY};
use http::{Method, StatusCode};
use jewel_catalog::catalog::Catalog;
use jewel_catalog::search::{facet_counts, filter_catalog};
use jewel_i18n::{LocaleProvider, StringTables};
use jewel_messaging::{InquiryLink, MessagingError};
use tracing::{debug, error, info, warn};

use crate::config::SiteConfig;
use crate::cookies::CookieStore;
use crate::error::SiteError;
use crate::request::{contact_form_from_body, filter_state_from_query, local_redirect, query_value};
use crate::response::{Body, Page, SiteResponse};
use crate::route::Route;
use crate::sections::*;
use crate::styles::CAROUSEL_SCRIPT;

/// A request, reduced to what the site reads.
#[derive(Debug, Clone)]
pub struct SiteRequest<'a> {
    pub method: Method,
    /// Path with optional query string, e.g. `/diamonds?group=color`.
    pub path_with_query: &'a str,
    /// Raw `Cookie` header.
    pub cookie: Option<&'a str>,
    pub body: &'a [u8],
}

impl<'a> SiteRequest<'a> {
    pub fn get(path_with_query: &'a str) -> Self {
        Self {
            method: Method::GET,
            path_with_query,
            cookie: None,
            body: &[],
        }
    }

    pub fn post(path_with_query: &'a str, body: &'a [u8]) -> Self {
        Self {
            method: Method::POST,
            path_with_query,
            cookie: None,
            body,
        }
    }

    pub fn with_cookie(mut self, cookie: &'a str) -> Self {
        self.cookie = Some(cookie);
        self
    }

    /// Path and query string, split at the first `?`.
    pub fn split(&self) -> (&'a str, &'a str) {
        self.path_with_query
            .split_once('?')
            .unwrap_or((self.path_with_query, ""))
    }
}

/// The storefront.
pub struct Site {
    config: SiteConfig,
    catalog: Catalog,
    tables: Arc<StringTables>,
    link: InquiryLink,
}

impl Site {
    /// Assemble a site from loaded parts.
    pub fn new(config: SiteConfig, catalog: Catalog, tables: StringTables) -> Result<Self, SiteError> {
        let link = config.inquiry_link()?;

        let unresolved = config.unresolved_placeholders();
        if !unresolved.is_empty() {
            warn!(fields = ?unresolved, "site config still has placeholder values");
        }

        info!(diamonds = catalog.len(), "site ready");
        Ok(Self {
            config,
            catalog,
            tables: Arc::new(tables),
            link,
        })
    }

    /// Site with the embedded catalog and string tables.
    pub fn builtin(config: SiteConfig) -> Result<Self, SiteError> {
        Self::new(config, Catalog::builtin()?, StringTables::builtin()?)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn link(&self) -> &InquiryLink {
        &self.link
    }

    /// Handle a request. Never fails: internal errors become a 500.
    pub fn handle(&self, request: &SiteRequest<'_>) -> SiteResponse {
        let year = chrono::Utc::now().year();
        match self.respond(request, year) {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, path = request.path_with_query, "request failed");
                SiteResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    headers: Vec::new(),
                    body: Body::Empty,
                }
            }
        }
    }

    fn respond(&self, request: &SiteRequest<'_>, year: i32) -> Result<SiteResponse, SiteError> {
        let (path, query) = request.split();
        let route = Route::parse(path);
        debug!(route = route.name(), method = %request.method, "routing request");

        let store = CookieStore::from_header(request.cookie);
        let mut provider = LocaleProvider::init(store, Arc::clone(&self.tables));

        if let Route::Language(code) = &route {
            if request.method != Method::GET && request.method != Method::HEAD {
                return Ok(SiteResponse::method_not_allowed("GET, HEAD"));
            }
            let next = query_value(query, "next");
            let target = local_redirect(next.as_deref()).to_string();
            return Ok(match provider.set_language(code) {
                Ok(_) => SiteResponse::redirect(target)
                    .with_cookies(provider.into_store().into_set_cookie_headers()),
                Err(e) => {
                    debug!(error = %e, "language switch ignored");
                    SiteResponse::redirect(target)
                }
            });
        }

        let allowed = if route == Route::Contact {
            "GET, HEAD, POST"
        } else {
            "GET, HEAD"
        };
        let is_post = request.method == Method::POST;
        let is_read = request.method == Method::GET || request.method == Method::HEAD;
        if !(is_read || (is_post && route == Route::Contact)) {
            return Ok(SiteResponse::method_not_allowed(allowed));
        }

        let scope = provider.scope();
        let locale = scope.locale()?;
        let ctx = ViewContext {
            locale,
            config: &self.config,
            link: &self.link,
            route: &route,
            current: request.path_with_query,
            year,
        };

        let response = match &route {
            Route::Home => self.home(&ctx),
            Route::Diamonds => self.listing(&ctx, query),
            Route::Diamond(id) => self.detail(&ctx, id),
            Route::About => self.about(&ctx),
            Route::Contact if is_post => self.contact_submit(&ctx, request.body),
            Route::Contact => self.contact(&ctx),
            Route::Jewellery => self.jewellery(&ctx),
            Route::Language(_) | Route::NotFound => self.not_found(&ctx),
        };

        Ok(response
            .with_header(CONTENT_LANGUAGE, locale.language().code())
            .with_header(VARY, "Cookie"))
    }

    fn home(&self, ctx: &ViewContext<'_>) -> SiteResponse {
        let page = Page::new(page_shell(ctx, "", ctx.locale.t("hero.description")))
            .section("hero", render_hero(ctx))
            .section("trust", render_trust_strip(ctx))
            .section("groups", render_group_cards(ctx, &self.catalog))
            .section("featured", render_featured(ctx, &self.catalog))
            .section("testimonials", render_testimonials(ctx))
            .section("cta", render_cta(ctx))
            .script(CAROUSEL_SCRIPT);
        SiteResponse::page(StatusCode::OK, page)
    }

    fn listing(&self, ctx: &ViewContext<'_>, query: &str) -> SiteResponse {
        let state = filter_state_from_query(query);
        let view = filter_catalog(&self.catalog, &state);
        let facets = facet_counts(&self.catalog, state.group);

        let page = Page::new(page_shell(
            ctx,
            ctx.locale.t("diamonds.title"),
            ctx.locale.t("diamonds.subtitle"),
        ))
        .section("listing-header", render_listing_header(ctx))
        .section("group-tabs", render_group_tabs(ctx, &state))
        .section("layout-start", r#"<div class="container listing-layout">"#)
        .section("facets", render_facets(ctx, &facets, &state))
        .section("results", render_results(ctx, &view, &state))
        .section("layout-end", "</div>");

        SiteResponse::page(StatusCode::OK, page)
            .with_header(http::HeaderName::from_static("x-result-count"), view.len().to_string())
    }

    fn detail(&self, ctx: &ViewContext<'_>, id: &str) -> SiteResponse {
        let Some(diamond) = self.catalog.get(id) else {
            debug!(id, "diamond not found");
            let page = Page::new(page_shell(ctx, ctx.locale.t("common.notFound"), ""))
                .section("not-found", render_diamond_not_found(ctx));
            return SiteResponse::page(StatusCode::NOT_FOUND, page);
        };

        let page = Page::new(page_shell(ctx, &diamond.name, &diamond.spec_summary()))
            .section("breadcrumb", render_breadcrumb(ctx, diamond))
            .section("detail", render_detail(ctx, diamond));
        SiteResponse::page(StatusCode::OK, page)
    }

    fn about(&self, ctx: &ViewContext<'_>) -> SiteResponse {
        let page = Page::new(page_shell(
            ctx,
            ctx.locale.t("nav.about"),
            ctx.locale.t("about.subtitle"),
        ))
        .section("page-hero", render_page_hero(ctx, "about.title", "about.subtitle"))
        .section("about", render_about(ctx))
        .section("cta", render_cta(ctx));
        SiteResponse::page(StatusCode::OK, page)
    }

    fn contact(&self, ctx: &ViewContext<'_>) -> SiteResponse {
        self.contact_page(ctx, &Default::default(), &[], StatusCode::OK)
    }

    /// Relay a submitted form to the chat service, or re-render it with the
    /// missing fields marked.
    fn contact_submit(&self, ctx: &ViewContext<'_>, body: &[u8]) -> SiteResponse {
        let form = contact_form_from_body(body);
        match self.link.relay_url(&form) {
            Ok(url) => {
                info!("contact form relayed");
                SiteResponse::redirect(url)
            }
            Err(MessagingError::MissingFields(missing)) => {
                debug!(missing = missing.len(), "contact form incomplete");
                self.contact_page(ctx, &form, &missing, StatusCode::BAD_REQUEST)
            }
            Err(e) => {
                warn!(error = %e, "contact form relay failed");
                self.contact_page(ctx, &form, &[], StatusCode::BAD_REQUEST)
            }
        }
    }

    fn contact_page(
        &self,
        ctx: &ViewContext<'_>,
        form: &jewel_messaging::ContactForm,
        missing: &[jewel_messaging::ContactField],
        status: StatusCode,
    ) -> SiteResponse {
        let page = Page::new(page_shell(
            ctx,
            ctx.locale.t("nav.contact"),
            ctx.locale.t("contact.subtitle"),
        ))
        .section("page-hero", render_page_hero(ctx, "contact.title", "contact.subtitle"))
        .section("contact", render_contact(ctx, form, missing));
        SiteResponse::page(status, page)
    }

    fn jewellery(&self, ctx: &ViewContext<'_>) -> SiteResponse {
        let page = Page::new(page_shell(
            ctx,
            ctx.locale.t("nav.jewellery"),
            ctx.locale.t("jewellery.text"),
        ))
        .section("coming-soon", render_coming_soon(ctx));
        SiteResponse::page(StatusCode::OK, page)
    }

    fn not_found(&self, ctx: &ViewContext<'_>) -> SiteResponse {
        let page = Page::new(page_shell(ctx, ctx.locale.t("common.pageNotFound"), ""))
            .section("not-found", render_page_not_found(ctx));
        SiteResponse::page(StatusCode::NOT_FOUND, page)
    }
}
