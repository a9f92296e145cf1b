use std::sync::Arc;

use aurum_catalog::pricing::ReferencePriceProvider;
use aurum_catalog::product::CatalogItem;

#[derive(Clone)]
pub struct AppState {
    /// The fixed catalog, loaded once at startup and shared read-only.
    pub catalog: Arc<Vec<CatalogItem>>,
    /// Gold reference price source, consulted once per request.
    pub gold: Arc<dyn ReferencePriceProvider>,
}
