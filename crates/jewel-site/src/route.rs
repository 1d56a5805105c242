//! URL routing.

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/diamonds?group=..&shape=..`
    Diamonds,
    /// `/diamonds/{id}`
    Diamond(String),
    /// `/about`
    About,
    /// `/contact`
    Contact,
    /// `/jewellery`, a coming-soon page.
    Jewellery,
    /// `/lang/{code}?next=..`, switches language and redirects.
    Language(String),
    NotFound,
}

impl Route {
    /// Resolve a path (without query string). A trailing slash is ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["diamonds"] => Route::Diamonds,
            ["diamonds", id] if !id.is_empty() => Route::Diamond(decode_segment(id)),
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["jewellery"] => Route::Jewellery,
            ["lang", code] if !code.is_empty() => Route::Language(decode_segment(code)),
            _ => Route::NotFound,
        }
    }

    /// Canonical path for the route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Diamonds => "/diamonds".to_string(),
            Route::Diamond(id) => format!("/diamonds/{}", urlencoding::encode(id)),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Jewellery => "/jewellery".to_string(),
            Route::Language(code) => format!("/lang/{}", urlencoding::encode(code)),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Name used in logs and the `x-route` header.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Diamonds => "diamonds",
            Route::Diamond(_) => "diamond",
            Route::About => "about",
            Route::Contact => "contact",
            Route::Jewellery => "jewellery",
            Route::Language(_) => "language",
            Route::NotFound => "not-found",
        }
    }

    /// Header navigation item this route highlights.
    pub fn nav_section(&self) -> Option<NavItem> {
        match self {
            Route::Home => Some(NavItem::Home),
            Route::Diamonds | Route::Diamond(_) => Some(NavItem::Diamonds),
            Route::Jewellery => Some(NavItem::Jewellery),
            Route::About => Some(NavItem::About),
            Route::Contact => Some(NavItem::Contact),
            Route::Language(_) | Route::NotFound => None,
        }
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Header navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Diamonds,
    Jewellery,
    About,
    Contact,
}

impl NavItem {
    pub const ALL: &'static [NavItem] = &[
        NavItem::Home,
        NavItem::Diamonds,
        NavItem::Jewellery,
        NavItem::About,
        NavItem::Contact,
    ];

    pub fn href(&self) -> &'static str {
        match self {
            NavItem::Home => "/",
            NavItem::Diamonds => "/diamonds",
            NavItem::Jewellery => "/jewellery",
            NavItem::About => "/about",
            NavItem::Contact => "/contact",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            NavItem::Home => "nav.home",
            NavItem::Diamonds => "nav.diamonds",
            NavItem::Jewellery => "nav.jewellery",
            NavItem::About => "nav.about",
            NavItem::Contact => "nav.contact",
        }
    }
}
