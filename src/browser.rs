use wasm_bindgen::JsCast;
use web_sys::{
    window, NavigationType, PerformanceNavigationTiming, ScrollBehavior, ScrollIntoViewOptions,
    Storage,
};

use crate::error::StorageError;
use crate::reveal::{FlagStorage, NavigationKind};
use crate::sections::Section;

// Legacy `PerformanceNavigation.TYPE_RELOAD`.
const LEGACY_TYPE_RELOAD: u16 = 1;

#[derive(Clone, Copy, Debug)]
pub enum BrowserStorage {
    Local,
    Session,
}

impl BrowserStorage {
    fn storage(self) -> Result<Storage, StorageError> {
        let window = window().ok_or(StorageError::Unavailable)?;
        let storage = match self {
            BrowserStorage::Local => window.local_storage(),
            BrowserStorage::Session => window.session_storage(),
        };
        storage
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl FlagStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// Reads the navigation type of the current page load, preferring the
/// Navigation Timing entry and falling back to `performance.navigation`.
pub fn navigation_kind() -> NavigationKind {
    let Some(performance) = window().and_then(|w| w.performance()) else {
        return NavigationKind::Navigate;
    };

    let timing = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceNavigationTiming>()
        .ok();

    if let Some(timing) = timing {
        return match timing.type_() {
            NavigationType::Reload => NavigationKind::Reload,
            NavigationType::BackForward => NavigationKind::BackForward,
            NavigationType::Prerender => NavigationKind::Prerender,
            _ => NavigationKind::Navigate,
        };
    }

    if performance.navigation().type_() == LEGACY_TYPE_RELOAD {
        NavigationKind::Reload
    } else {
        NavigationKind::Navigate
    }
}

pub fn scroll_to(section: Section) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));

    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::debug!("No element for section #{}", section.id());
    }
}
