//! Storefront pages for The Lab Jewel.
//!
//! Platform-independent request handling with shell-first streaming:
//! - `Site` - Loaded catalog, string tables and link builder; routes requests
//! - `Route` - Path to page mapping
//! - `Page` / `SiteResponse` - Shell plus named sections, status and headers
//! - `StreamingSink` - Shell-first body writer over any byte sink
//! - `CookieStore` - Language preference persisted in a cookie
//!
//! The hosting workload only converts its request type into a
//! [`SiteRequest`] and streams the returned page.

pub mod config;
pub mod cookies;
pub mod error;
pub mod escape;
pub mod handler;
pub mod request;
pub mod response;
pub mod route;
pub mod sections;
pub mod shell;
pub mod sink;
pub mod styles;

pub use config::SiteConfig;
pub use cookies::CookieStore;
pub use error::SiteError;
pub use handler::{Site, SiteRequest};
pub use response::{Body, Page, Section, SiteResponse};
pub use route::{NavItem, Route};
pub use shell::{HeadContent, Shell};
pub use sink::StreamingSink;
