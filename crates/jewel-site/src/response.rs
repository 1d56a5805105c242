//! Responses produced by the site, independent of the hosting platform.
//!
//! A page is a shell plus an ordered list of named sections. The platform
//! adapter streams it through [`StreamingSink`]; tests render it to a
//! string.

use std::fmt::Display;

use futures::Sink;
use http::header::{CACHE_CONTROL, CONTENT_TYPE, LOCATION, SET_COOKIE};
use http::{HeaderName, StatusCode};

use crate::error::SiteError;
use crate::shell::Shell;
use crate::sink::StreamingSink;

/// A named piece of the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub html: String,
}

/// A full HTML page.
#[derive(Debug, Clone)]
pub struct Page {
    pub shell: Shell,
    pub sections: Vec<Section>,
    /// Inline scripts appended before the closing tags.
    pub scripts: Vec<&'static str>,
}

impl Page {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            sections: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Append a section.
    pub fn section(mut self, name: &'static str, html: impl Into<String>) -> Self {
        self.sections.push(Section {
            name,
            html: html.into(),
        });
        self
    }

    /// Append an inline script.
    pub fn script(mut self, script: &'static str) -> Self {
        self.scripts.push(script);
        self
    }

    fn closing(&self) -> String {
        let mut html: String = self
            .scripts
            .iter()
            .map(|s| format!("<script>{}</script>\n", s))
            .collect();
        html.push_str(&self.shell.render_closing());
        html
    }

    /// Stream the page shell-first: opening shell, each section, closing.
    pub async fn stream<S, E>(&self, sink: &mut StreamingSink<S, E>) -> Result<(), SiteError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        sink.send_shell(&self.shell.render_opening()).await?;
        for section in &self.sections {
            sink.send_section(section.name, &section.html).await?;
        }
        sink.send_section("closing", &self.closing()).await?;
        sink.complete().await
    }

    /// Render the whole document at once.
    pub fn render(&self) -> String {
        let mut html = self.shell.render_opening();
        for section in &self.sections {
            html.push_str(&section.html);
        }
        html.push_str(&self.closing());
        html
    }

    /// Names of the sections, in streaming order.
    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.name).collect()
    }
}

/// Response body.
#[derive(Debug, Clone)]
pub enum Body {
    Empty,
    Page(Box<Page>),
}

/// A response: status, headers and body.
#[derive(Debug, Clone)]
pub struct SiteResponse {
    pub status: StatusCode,
    pub headers: Vec<(HeaderName, String)>,
    pub body: Body,
}

impl SiteResponse {
    /// An HTML page.
    pub fn page(status: StatusCode, page: Page) -> Self {
        Self {
            status,
            headers: vec![(CONTENT_TYPE, "text/html; charset=utf-8".to_string())],
            body: Body::Page(Box::new(page)),
        }
    }

    /// `303 See Other` to a location.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SEE_OTHER,
            headers: vec![
                (LOCATION, location.into()),
                (CACHE_CONTROL, "no-store".to_string()),
            ],
            body: Body::Empty,
        }
    }

    /// `405 Method Not Allowed`.
    pub fn method_not_allowed(allow: &str) -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            headers: vec![(http::header::ALLOW, allow.to_string())],
            body: Body::Empty,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Add `Set-Cookie` headers.
    pub fn with_cookies(mut self, cookies: impl IntoIterator<Item = String>) -> Self {
        self.headers
            .extend(cookies.into_iter().map(|c| (SET_COOKIE, c)));
        self
    }

    /// First value of a header.
    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The page, if the body is one.
    pub fn page_body(&self) -> Option<&Page> {
        match &self.body {
            Body::Page(page) => Some(page.as_ref()),
            Body::Empty => None,
        }
    }

    /// Headers as `(name, bytes)` pairs, the shape platform header lists take.
    pub fn header_list(&self) -> Vec<(String, Vec<u8>)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str().to_owned(), value.clone().into_bytes()))
            .collect()
    }
}
