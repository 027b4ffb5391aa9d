//! Route Table
//!
//! Client-side routes, matched in order against the current path. A pattern
//! is a list of `/`-separated segments where a segment starting with `:`
//! captures one path segment as the route identifier.

/// Page a route resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Login,
    Health,
    ProductList,
    ProductDetail,
    OfferList,
    OfferDetail,
}

/// One entry of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub page: Page,
}

impl RouteDef {
    pub const fn new(pattern: &'static str, page: Page) -> Self {
        Self { pattern, page }
    }

    /// Match `path` against this route, capturing the positional segment
    pub fn matches(&self, path: &str) -> Option<RouteMatch> {
        let mut wanted = segments(self.pattern);
        let mut given = segments(path);
        let mut id = None;

        loop {
            match (wanted.next(), given.next()) {
                (None, None) => break,
                (Some(w), Some(g)) if w.starts_with(':') => id = Some(g.to_string()),
                (Some(w), Some(g)) if w == g => {}
                _ => return None,
            }
        }

        Some(RouteMatch {
            page: self.page,
            id,
        })
    }
}

/// Result of resolving a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    /// Positional segment, exactly as it appeared in the path
    pub id: Option<String>,
}

/// The application's routes, in dispatch order
pub const ROUTES: &[RouteDef] = &[
    RouteDef::new("/", Page::Dashboard),
    RouteDef::new("/login", Page::Login),
    RouteDef::new("/health", Page::Health),
    RouteDef::new("/products", Page::ProductList),
    RouteDef::new("/products/:id", Page::ProductDetail),
    RouteDef::new("/offers", Page::OfferList),
    RouteDef::new("/offers/:id", Page::OfferDetail),
];

/// First route in `routes` matching `path`
pub fn resolve(routes: &[RouteDef], path: &str) -> Option<RouteMatch> {
    routes.iter().find_map(|route| route.matches(path))
}

pub fn product_href(id: u64) -> String {
    format!("/products/{}", id)
}

pub fn offer_href(id: u64) -> String {
    format!("/offers/{}", id)
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> Option<Page> {
        resolve(ROUTES, path).map(|m| m.page)
    }

    #[test]
    fn test_static_routes() {
        assert_eq!(page("/"), Some(Page::Dashboard));
        assert_eq!(page("/login"), Some(Page::Login));
        assert_eq!(page("/health"), Some(Page::Health));
        assert_eq!(page("/products"), Some(Page::ProductList));
        assert_eq!(page("/offers"), Some(Page::OfferList));
    }

    #[test]
    fn test_detail_routes_capture_id_verbatim() {
        let m = resolve(ROUTES, "/products/42").unwrap();
        assert_eq!(m.page, Page::ProductDetail);
        assert_eq!(m.id.as_deref(), Some("42"));

        let m = resolve(ROUTES, "/offers/a%20b").unwrap();
        assert_eq!(m.page, Page::OfferDetail);
        assert_eq!(m.id.as_deref(), Some("a%20b"));
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(page("/products/"), Some(Page::ProductList));
        assert_eq!(
            resolve(ROUTES, "/offers/7/").and_then(|m| m.id),
            Some("7".to_string())
        );
    }

    #[test]
    fn test_unmatched_paths() {
        assert_eq!(page("/stores"), None);
        assert_eq!(page("/products/1/reviews"), None);
        assert_eq!(page("/productsx"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let table = [
            RouteDef::new("/products/:id", Page::ProductDetail),
            RouteDef::new("/products/new", Page::Login),
        ];
        assert_eq!(
            resolve(&table, "/products/new").map(|m| m.page),
            Some(Page::ProductDetail)
        );
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(product_href(5), "/products/5");
        assert_eq!(offer_href(8), "/offers/8");
    }
}
