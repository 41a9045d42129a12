//! Screen implementations, one per route.

pub mod catalog;
pub mod detail;

pub use catalog::CatalogScreen;
pub use detail::DetailScreen;

use crate::screen::ScreenId;
use crate::view::View;

/// Build every screen the app can show.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn View>)> {
    vec![
        (ScreenId::Catalog, Box::new(CatalogScreen::new())),
        (ScreenId::Detail, Box::new(DetailScreen::new())),
    ]
}
