use std::sync::Arc;
use tracing::instrument;

use crate::models::{MenuItem, StoreResult};
use crate::repositories::MenuRepository;

/// Service for reading the breakfast menu.
///
/// Written against the `MenuRepository` trait only, so either store backend
/// substitutes without changes here or in the HTTP layer.
pub struct MenuService {
    repository: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self { repository }
    }

    /// Return the full menu in store order.
    #[instrument(skip(self))]
    pub async fn list_menu(&self) -> StoreResult<Vec<MenuItem>> {
        self.repository.list_items().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryMenuRepository;

    #[tokio::test]
    async fn test_list_menu_passes_through_store_order() {
        let repository = Arc::new(InMemoryMenuRepository::new(vec![
            MenuItem::new(2, "Tea", 20),
            MenuItem::new(1, "Toast", 30),
        ]));
        let service = MenuService::new(repository);

        let items = service.list_menu().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Tea");
        assert_eq!(items[1].name, "Toast");
    }
}
