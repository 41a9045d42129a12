// ── Route state machine ──

use tracing::debug;

use crate::route::Route;

/// What the app must do after a route change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Activate the catalog screen. `fetch_first_page` is set exactly
    /// once, on the catalog's first activation.
    ShowCatalog { fetch_first_page: bool },
    /// Activate the detail screen and fetch this character.
    ShowDetail { id: u64 },
}

/// Maps decoded routes to [`Transition`]s.
///
/// Detail entry fetches every time. Catalog entry fetches only on
/// first activation; returning to the catalog later shows whatever was
/// already loaded, without a new request.
#[derive(Debug)]
pub struct Router {
    route: Route,
    catalog_primed: bool,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            route: Route::Catalog,
            catalog_primed: false,
        }
    }

    /// The route most recently applied.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Apply a decoded route and report the required transition.
    pub fn navigate(&mut self, route: Route) -> Transition {
        self.route = route;
        match route {
            Route::Catalog => {
                let fetch_first_page = !self.catalog_primed;
                self.catalog_primed = true;
                debug!(fetch_first_page, "entering catalog");
                Transition::ShowCatalog { fetch_first_page }
            }
            Route::Detail(id) => {
                debug!(id, "entering detail");
                Transition::ShowDetail { id }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn first_catalog_entry_fetches_page_one() {
        let mut router = Router::new();
        assert_eq!(
            router.navigate(Route::Catalog),
            Transition::ShowCatalog {
                fetch_first_page: true
            }
        );
    }

    #[test]
    fn detail_entry_always_fetches() {
        let mut router = Router::new();
        assert_eq!(
            router.navigate(Route::Detail(183)),
            Transition::ShowDetail { id: 183 }
        );
        router.navigate(Route::Catalog);
        assert_eq!(
            router.navigate(Route::Detail(183)),
            Transition::ShowDetail { id: 183 }
        );
    }

    #[test]
    fn returning_to_catalog_does_not_refetch() {
        let mut router = Router::new();
        router.navigate(Route::Catalog);
        router.navigate(Route::Detail(183));

        assert_eq!(
            router.navigate(Route::Catalog),
            Transition::ShowCatalog {
                fetch_first_page: false
            }
        );
    }

    #[test]
    fn deep_link_start_defers_the_catalog_fetch() {
        let mut router = Router::new();
        router.navigate(Route::Detail(183));

        // Going back lands on a catalog that has never loaded, so the
        // deferred first fetch fires now.
        assert_eq!(
            router.navigate(Route::Catalog),
            Transition::ShowCatalog {
                fetch_first_page: true
            }
        );
        // And only now.
        router.navigate(Route::Detail(5));
        assert_eq!(
            router.navigate(Route::Catalog),
            Transition::ShowCatalog {
                fetch_first_page: false
            }
        );
    }

    #[test]
    fn router_tracks_the_current_route() {
        let mut router = Router::new();
        router.navigate(Route::Detail(9));
        assert_eq!(router.route(), Route::Detail(9));
    }
}
