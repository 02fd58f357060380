use std::sync::Arc;

use content::ModuleCatalog;
use track_core::model::{Module, ModuleId};

/// Read-side access to the authored module catalog.
#[derive(Clone)]
pub struct ModuleService {
    catalog: Arc<ModuleCatalog>,
}

impl ModuleService {
    #[must_use]
    pub fn new(catalog: Arc<ModuleCatalog>) -> Self {
        Self { catalog }
    }

    /// All modules, in site order.
    #[must_use]
    pub fn modules(&self) -> Vec<Arc<Module>> {
        self.catalog.modules().to_vec()
    }

    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<Arc<Module>> {
        self.catalog.module(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_modules_in_site_order() {
        let catalog = Arc::new(ModuleCatalog::load().unwrap());
        let service = ModuleService::new(catalog);

        let ids: Vec<ModuleId> = service.modules().iter().map(|m| m.id()).collect();
        assert_eq!(ids, ModuleId::ALL);
    }

    #[test]
    fn looks_up_single_modules() {
        let catalog = Arc::new(ModuleCatalog::load().unwrap());
        let service = ModuleService::new(catalog);

        let padlock = service.module(ModuleId::Padlock).unwrap();
        assert_eq!(padlock.title(), "Padlock Myths");
    }
}
