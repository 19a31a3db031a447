//! The one-time "unveil the present" gate on the hero banner.
//!
//! State survives in two flags: a long-lived one in `localStorage` and a
//! per-session marker in `sessionStorage`. A hard reload, or a visit with no
//! session marker, wipes both so the overlay can be replayed.

use log::{debug, info, warn};

use crate::config::{CelebrationConfig, StorageKeys, TriggerLabels};
use crate::error::StorageError;
use crate::sections::Section;

/// Value written for a set flag. Absent means unset.
pub const FLAG_SET: &str = "true";

pub trait FlagStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// UI side effects the gate triggers. None of them report back.
pub trait CelebrationEffects {
    fn burst(&self);
    fn show_overlay_after(&self, delay_ms: u32);
    fn scroll_to(&self, section: Section);
}

/// How the browser reports the current page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKind {
    Navigate,
    Reload,
    BackForward,
    Prerender,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    NotYetRevealed,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    Unveil,
    ScrollToTributes,
}

impl RevealState {
    pub fn on_press(self) -> (RevealState, PressOutcome) {
        match self {
            RevealState::NotYetRevealed => (RevealState::Revealed, PressOutcome::Unveil),
            RevealState::Revealed => (RevealState::Revealed, PressOutcome::ScrollToTributes),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerLabel {
    Unveil,
    Unveiling,
    GoToTributes,
}

impl TriggerLabel {
    pub fn text(self, labels: &TriggerLabels) -> &str {
        match self {
            TriggerLabel::Unveil => &labels.unveil,
            TriggerLabel::Unveiling => &labels.unveiling,
            TriggerLabel::GoToTributes => &labels.go_to_tributes,
        }
    }
}

pub struct RevealGate<L, S> {
    long_lived: L,
    session: S,
    keys: StorageKeys,
    overlay_delay_ms: u32,
    state: RevealState,
    label: TriggerLabel,
}

impl<L: FlagStorage, S: FlagStorage> RevealGate<L, S> {
    pub fn activate(
        long_lived: L,
        session: S,
        navigation: NavigationKind,
        config: &CelebrationConfig,
    ) -> Self {
        let keys = config.storage_keys.clone();
        let session_seen = read_flag(&session, &keys.session).is_some();

        let state = if navigation == NavigationKind::Reload || !session_seen {
            debug!("Fresh visit ({:?}), resetting reveal flags", navigation);
            clear_flag(&long_lived, &keys.revealed);
            clear_flag(&session, &keys.session);
            RevealState::NotYetRevealed
        } else if read_flag(&long_lived, &keys.revealed).as_deref() == Some(FLAG_SET) {
            RevealState::Revealed
        } else {
            RevealState::NotYetRevealed
        };

        write_flag(&session, &keys.session);

        let label = match state {
            RevealState::NotYetRevealed => TriggerLabel::Unveil,
            RevealState::Revealed => TriggerLabel::GoToTributes,
        };

        Self {
            long_lived,
            session,
            keys,
            overlay_delay_ms: config.overlay_delay_ms,
            state,
            label,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn label(&self) -> TriggerLabel {
        self.label
    }

    pub fn press(&mut self, effects: &impl CelebrationEffects) -> PressOutcome {
        let (next, outcome) = self.state.on_press();
        match outcome {
            PressOutcome::Unveil => {
                info!("Unveiling the present");
                self.label = TriggerLabel::Unveiling;
                effects.burst();
                effects.show_overlay_after(self.overlay_delay_ms);
                write_flag(&self.long_lived, &self.keys.revealed);
                write_flag(&self.session, &self.keys.session);
            }
            PressOutcome::ScrollToTributes => effects.scroll_to(Section::Tributes),
        }
        self.state = next;
        outcome
    }

    pub fn dismiss_overlay(&mut self) {
        self.label = TriggerLabel::GoToTributes;
    }
}

fn read_flag(storage: &impl FlagStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Could not read {}: {}", key, e);
            None
        }
    }
}

fn write_flag(storage: &impl FlagStorage, key: &str) {
    if let Err(e) = storage.set(key, FLAG_SET) {
        warn!("Could not persist {}: {}", key, e);
    }
}

fn clear_flag(storage: &impl FlagStorage, key: &str) {
    if let Err(e) = storage.remove(key) {
        warn!("Could not clear {}: {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.0.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        fn value(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn writes(&self) -> HashMap<String, String> {
            self.0.borrow().clone()
        }
    }

    impl FlagStorage for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.value(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().remove(key);
            Ok(())
        }
    }

    struct DisabledStorage;

    impl FlagStorage for DisabledStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[derive(Debug, PartialEq)]
    enum Effect {
        Burst,
        Overlay(u32),
        Scroll(Section),
    }

    #[derive(Default)]
    struct RecordingEffects(RefCell<Vec<Effect>>);

    impl CelebrationEffects for RecordingEffects {
        fn burst(&self) {
            self.0.borrow_mut().push(Effect::Burst);
        }

        fn show_overlay_after(&self, delay_ms: u32) {
            self.0.borrow_mut().push(Effect::Overlay(delay_ms));
        }

        fn scroll_to(&self, section: Section) {
            self.0.borrow_mut().push(Effect::Scroll(section));
        }
    }

    fn keys() -> StorageKeys {
        StorageKeys::default()
    }

    fn config() -> CelebrationConfig {
        CelebrationConfig::default()
    }

    #[test]
    fn transition_is_one_way() {
        assert_eq!(
            RevealState::NotYetRevealed.on_press(),
            (RevealState::Revealed, PressOutcome::Unveil)
        );
        assert_eq!(
            RevealState::Revealed.on_press(),
            (RevealState::Revealed, PressOutcome::ScrollToTributes)
        );
    }

    #[test]
    fn first_visit_starts_unrevealed_and_marks_session() {
        let local = MemoryStorage::default();
        let session = MemoryStorage::default();

        let gate = RevealGate::activate(local.clone(), session.clone(), NavigationKind::Navigate, &config());

        assert_eq!(gate.state(), RevealState::NotYetRevealed);
        assert_eq!(gate.label(), TriggerLabel::Unveil);
        assert_eq!(local.value(&keys().revealed), None);
        assert_eq!(session.value(&keys().session).as_deref(), Some(FLAG_SET));
    }

    #[test]
    fn pressing_once_unveils_and_persists_both_flags() {
        let local = MemoryStorage::default();
        let session = MemoryStorage::default();
        let effects = RecordingEffects::default();
        let mut gate = RevealGate::activate(local.clone(), session.clone(), NavigationKind::Navigate, &config());

        let outcome = gate.press(&effects);

        assert_eq!(outcome, PressOutcome::Unveil);
        assert_eq!(gate.state(), RevealState::Revealed);
        assert_eq!(gate.label(), TriggerLabel::Unveiling);
        assert_eq!(local.value(&keys().revealed).as_deref(), Some(FLAG_SET));
        assert_eq!(session.value(&keys().session).as_deref(), Some(FLAG_SET));
        assert_eq!(*effects.0.borrow(), vec![Effect::Burst, Effect::Overlay(1000)]);
    }

    #[test]
    fn returning_visit_is_already_revealed() {
        let local = MemoryStorage::with(&keys().revealed, FLAG_SET);
        let session = MemoryStorage::with(&keys().session, FLAG_SET);
        let effects = RecordingEffects::default();

        let gate = RevealGate::activate(local, session, NavigationKind::Navigate, &config());

        assert_eq!(gate.state(), RevealState::Revealed);
        assert_eq!(gate.label(), TriggerLabel::GoToTributes);
        assert!(effects.0.borrow().is_empty());
    }

    #[test]
    fn back_forward_keeps_the_reveal() {
        let local = MemoryStorage::with(&keys().revealed, FLAG_SET);
        let session = MemoryStorage::with(&keys().session, FLAG_SET);

        let gate = RevealGate::activate(local, session, NavigationKind::BackForward, &config());

        assert_eq!(gate.state(), RevealState::Revealed);
    }

    #[test]
    fn session_marker_without_reveal_stays_unrevealed() {
        let local = MemoryStorage::default();
        let session = MemoryStorage::with(&keys().session, FLAG_SET);

        let gate = RevealGate::activate(local, session, NavigationKind::Navigate, &config());

        assert_eq!(gate.state(), RevealState::NotYetRevealed);
        assert_eq!(gate.label(), TriggerLabel::Unveil);
    }

    #[test]
    fn long_lived_flag_alone_is_reset_on_a_new_session() {
        let local = MemoryStorage::with(&keys().revealed, FLAG_SET);
        let session = MemoryStorage::default();

        let gate = RevealGate::activate(local.clone(), session, NavigationKind::Navigate, &config());

        assert_eq!(gate.state(), RevealState::NotYetRevealed);
        assert_eq!(local.value(&keys().revealed), None);
    }

    #[test]
    fn reload_always_resets() {
        let local = MemoryStorage::with(&keys().revealed, FLAG_SET);
        let session = MemoryStorage::with(&keys().session, FLAG_SET);

        let gate = RevealGate::activate(local.clone(), session.clone(), NavigationKind::Reload, &config());

        assert_eq!(gate.state(), RevealState::NotYetRevealed);
        assert_eq!(gate.label(), TriggerLabel::Unveil);
        assert_eq!(local.value(&keys().revealed), None);
        // Re-marked after the reset so the next in-session render skips it.
        assert_eq!(session.value(&keys().session).as_deref(), Some(FLAG_SET));
    }

    #[test]
    fn pressing_when_revealed_only_navigates() {
        let local = MemoryStorage::default();
        let session = MemoryStorage::default();
        let mut gate = RevealGate::activate(local.clone(), session.clone(), NavigationKind::Navigate, &config());
        gate.press(&RecordingEffects::default());
        gate.dismiss_overlay();
        let local_before = local.writes();
        let session_before = session.writes();

        let effects = RecordingEffects::default();
        let first = gate.press(&effects);
        let second = gate.press(&effects);

        assert_eq!(first, PressOutcome::ScrollToTributes);
        assert_eq!(second, PressOutcome::ScrollToTributes);
        assert_eq!(gate.state(), RevealState::Revealed);
        assert_eq!(gate.label(), TriggerLabel::GoToTributes);
        assert_eq!(
            *effects.0.borrow(),
            vec![Effect::Scroll(Section::Tributes), Effect::Scroll(Section::Tributes)]
        );
        assert_eq!(local.writes(), local_before);
        assert_eq!(session.writes(), session_before);
    }

    #[test]
    fn dismissing_the_overlay_only_changes_the_label() {
        let mut gate = RevealGate::activate(
            MemoryStorage::default(),
            MemoryStorage::default(),
            NavigationKind::Navigate,
            &config(),
        );
        gate.press(&RecordingEffects::default());

        gate.dismiss_overlay();

        assert_eq!(gate.state(), RevealState::Revealed);
        assert_eq!(gate.label(), TriggerLabel::GoToTributes);
    }

    #[test]
    fn disabled_storage_degrades_to_a_fresh_gate() {
        let effects = RecordingEffects::default();
        let mut gate = RevealGate::activate(DisabledStorage, DisabledStorage, NavigationKind::Navigate, &config());
        assert_eq!(gate.state(), RevealState::NotYetRevealed);

        assert_eq!(gate.press(&effects), PressOutcome::Unveil);
        assert_eq!(gate.state(), RevealState::Revealed);

        let again = RevealGate::activate(DisabledStorage, DisabledStorage, NavigationKind::Navigate, &config());
        assert_eq!(again.state(), RevealState::NotYetRevealed);
    }

    #[test]
    fn labels_follow_config() {
        let labels = TriggerLabels::default();
        assert_eq!(TriggerLabel::Unveil.text(&labels), "Click to Unveil Present");
        assert_eq!(TriggerLabel::GoToTributes.text(&labels), "View Guest Book");
    }
}
