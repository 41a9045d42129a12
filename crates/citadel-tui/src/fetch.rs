//! Background fetch tasks bridging [`CatalogService`] calls into the
//! action loop.
//!
//! Each task runs one request to completion and reports the outcome as
//! an [`Action`] tagged with the generation token it was started under.
//! Nothing here decides whether the result is still wanted; the app
//! loop checks the token when the completion is processed.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use citadel_core::{CatalogService, FetchToken};

use crate::action::Action;

/// Spawn a catalog page fetch.
pub fn spawn_page_fetch(
    service: Arc<CatalogService>,
    page: u32,
    token: FetchToken,
    action_tx: mpsc::UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        match service.page(page).await {
            Ok(catalog) => {
                debug!(page, count = catalog.characters.len(), "page fetch complete");
                let _ = action_tx.send(Action::CatalogLoaded {
                    token,
                    page,
                    total_pages: catalog.total_pages,
                    characters: Arc::new(catalog.characters),
                });
            }
            Err(err) => {
                warn!(page, error = %err, "page fetch failed");
                let _ = action_tx.send(Action::CatalogFailed {
                    token,
                    message: err.message().to_owned(),
                });
            }
        }
    });
}

/// Spawn a single-character profile fetch.
pub fn spawn_profile_fetch(
    service: Arc<CatalogService>,
    id: u64,
    token: FetchToken,
    action_tx: mpsc::UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        match service.profile(id).await {
            Ok(profile) => {
                debug!(id, "profile fetch complete");
                let _ = action_tx.send(Action::DetailLoaded {
                    token,
                    profile: Arc::new(profile),
                });
            }
            Err(err) => {
                warn!(id, error = %err, "profile fetch failed");
                let _ = action_tx.send(Action::DetailFailed {
                    token,
                    message: err.message().to_owned(),
                });
            }
        }
    });
}
