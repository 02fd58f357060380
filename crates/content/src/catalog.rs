//! The authored module set, embedded at compile time.
//!
//! Content authors edit the JSON documents under `assets/`; everything
//! is parsed and validated once at startup, so a malformed module can
//! never reach a view.

use std::sync::Arc;

use thiserror::Error;
use track_core::model::{ContentError, Module, ModuleDraft, ModuleId};

const JOURNEY: &str = include_str!("../assets/journey.json");
const HANDSHAKE: &str = include_str!("../assets/handshake.json");
const PADLOCK: &str = include_str!("../assets/padlock.json");
const MFA: &str = include_str!("../assets/mfa.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("module {id} is not valid JSON: {source}")]
    Parse {
        id: ModuleId,
        source: serde_json::Error,
    },

    #[error("module {id} failed validation: {source}")]
    Invalid {
        id: ModuleId,
        source: ContentError,
    },

    #[error("module authored as {declared} sits in the {expected} slot")]
    WrongSlot {
        declared: ModuleId,
        expected: ModuleId,
    },
}

/// The validated set of authored modules, in site order.
pub struct ModuleCatalog {
    modules: Vec<Arc<Module>>,
}

impl ModuleCatalog {
    /// Parse and validate all embedded modules.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` naming the offending module if any
    /// document fails to parse or validate. Treat this as fatal at
    /// load: it means the authored content itself is broken.
    pub fn load() -> Result<Self, CatalogError> {
        let sources = [
            (ModuleId::Journey, JOURNEY),
            (ModuleId::Handshake, HANDSHAKE),
            (ModuleId::Padlock, PADLOCK),
            (ModuleId::Mfa, MFA),
        ];

        let mut modules = Vec::with_capacity(sources.len());
        for (expected, raw) in sources {
            let draft: ModuleDraft = serde_json::from_str(raw)
                .map_err(|source| CatalogError::Parse {
                    id: expected,
                    source,
                })?;
            if draft.id != expected {
                return Err(CatalogError::WrongSlot {
                    declared: draft.id,
                    expected,
                });
            }
            let module = draft
                .validate()
                .map_err(|source| CatalogError::Invalid {
                    id: expected,
                    source,
                })?;
            modules.push(Arc::new(module));
        }

        Ok(Self { modules })
    }

    /// All modules, in site order.
    #[must_use]
    pub fn modules(&self) -> &[Arc<Module>] {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<Arc<Module>> {
        self.modules
            .iter()
            .find(|module| module.id() == id)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_all_four_modules() {
        let catalog = ModuleCatalog::load().unwrap();
        assert_eq!(catalog.len(), 4);
        for id in ModuleId::ALL {
            assert!(catalog.module(id).is_some(), "missing module {id}");
        }
    }

    #[test]
    fn modules_are_in_site_order() {
        let catalog = ModuleCatalog::load().unwrap();
        let order: Vec<ModuleId> = catalog.modules().iter().map(|m| m.id()).collect();
        assert_eq!(order, ModuleId::ALL);
    }

    #[test]
    fn every_module_has_three_questions() {
        let catalog = ModuleCatalog::load().unwrap();
        for module in catalog.modules() {
            assert_eq!(
                module.questions().len(),
                3,
                "module {} question count",
                module.id()
            );
        }
    }

    #[test]
    fn handshake_offers_the_technical_view() {
        let catalog = ModuleCatalog::load().unwrap();
        let handshake = catalog.module(ModuleId::Handshake).unwrap();
        assert!(handshake.has_technical_view());
        assert_eq!(handshake.topics().len(), 5);
    }

    #[test]
    fn mfa_opens_on_the_strongest_method() {
        let catalog = ModuleCatalog::load().unwrap();
        let mfa = catalog.module(ModuleId::Mfa).unwrap();
        assert_eq!(mfa.initial_topic(), mfa.topics().len() - 1);
        assert!(mfa.scenarios().is_some());
    }

    #[test]
    fn padlock_choice_check_has_one_safe_card() {
        let catalog = ModuleCatalog::load().unwrap();
        let padlock = catalog.module(ModuleId::Padlock).unwrap();
        let check = padlock.choice_check().expect("padlock comparison cards");
        let safe = check.cards.iter().filter(|card| card.safe).count();
        assert_eq!(safe, 1);
    }
}
