//! Section renderers.
//!
//! Every renderer takes a [`ViewContext`] and returns an HTML fragment.
//! Text comes from the locale in the context, never from global state.

mod cards;
mod detail;
mod home;
mod layout;
mod listing;
mod pages;

pub use cards::*;
pub use detail::*;
pub use home::*;
pub use layout::*;
pub use listing::*;
pub use pages::*;

use jewel_catalog::catalog::Group;
use jewel_i18n::Locale;
use jewel_messaging::InquiryLink;

use crate::config::SiteConfig;
use crate::escape::html_escape;
use crate::route::Route;

/// Everything a section needs to render.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub locale: &'a Locale,
    pub config: &'a SiteConfig,
    pub link: &'a InquiryLink,
    pub route: &'a Route,
    /// Path and query of the current request, for the language switcher.
    pub current: &'a str,
    /// Year shown in the footer.
    pub year: i32,
}

impl<'a> ViewContext<'a> {
    /// Translated, HTML-escaped text.
    pub fn t(&self, key: &str) -> String {
        html_escape(self.locale.t(key))
    }

    /// Translated text with `{name}` placeholders, HTML-escaped.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        html_escape(&self.locale.format(key, args))
    }

    /// Escaped brand name.
    pub fn brand(&self) -> String {
        html_escape(&self.config.brand.name)
    }
}

/// String-table key for a group's name.
pub fn group_label_key(group: Group) -> &'static str {
    match group {
        Group::White => "groups.white",
        Group::Color => "groups.color",
        Group::Melee => "groups.melee",
        Group::Fancy => "groups.fancy",
    }
}

/// String-table key for a group's one-line description.
pub fn group_description_key(group: Group) -> &'static str {
    match group {
        Group::White => "groups.whiteDesc",
        Group::Color => "groups.colorDesc",
        Group::Melee => "groups.meleeDesc",
        Group::Fancy => "groups.fancyDesc",
    }
}
