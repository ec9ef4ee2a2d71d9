//! The theme picker: resolution, apply/persist, mounting, and the
//! system-appearance follow behavior.

use serde::Serialize;

use crate::store::ChoiceStore;
use crate::theme::{detect_color_mode, ColorMode, Theme, ThemeRegistry, DEFAULT_THEME};
use crate::widget::Selector;

/// Host seam: where the widget mounts and where applied ids land.
///
/// The two methods mirror what a host page gives the picker: a header
/// region to insert the control into, and a document root to carry the
/// active theme id.
pub trait Surface {
    /// Offers the selector to the host's header region.
    ///
    /// Returning `false` means the host has no header; the picker then
    /// stays inert with no further side effects.
    fn mount(&mut self, selector: &Selector) -> bool;

    /// Receives every applied theme id.
    fn apply_theme(&mut self, id: &str);
}

/// Notification broadcast to subscribers on every apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeChanged {
    pub theme: String,
}

type Subscriber = Box<dyn FnMut(&ThemeChanged)>;

/// Theme selection with persistence and OS appearance fallback.
///
/// The picker owns the registry, the storage seam, and the selector
/// widget. Mount it once against a [`Surface`]; afterwards route user
/// selections through [`ThemePicker::select`] and appearance changes
/// through [`ThemePicker::system_changed`] or [`ThemePicker::refresh`].
pub struct ThemePicker {
    registry: ThemeRegistry,
    store: Box<dyn ChoiceStore>,
    selector: Selector,
    active: Option<String>,
    follow_system: bool,
    mounted: bool,
    subscribers: Vec<Subscriber>,
}

impl ThemePicker {
    /// Creates a picker over the builtin themes.
    pub fn new(store: impl ChoiceStore + 'static) -> Self {
        Self::with_registry(ThemeRegistry::builtin(), store)
    }

    /// Creates a picker over a custom registry.
    ///
    /// Build the registry through [`ThemeRegistry::from_themes`] so its
    /// invariants hold.
    pub fn with_registry(registry: ThemeRegistry, store: impl ChoiceStore + 'static) -> Self {
        let selector = Selector::from_registry(&registry);
        Self {
            registry,
            store: Box::new(store),
            selector,
            active: None,
            follow_system: false,
            mounted: false,
            subscribers: Vec::new(),
        }
    }

    /// Registers a callback invoked with every applied theme id.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ThemeChanged) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// The themes offered by this picker.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// The selection control, for rendering and value inspection.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// The applied theme id, once mounted or applied.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The applied theme, for rendering the widget with its own palette.
    pub fn active_theme(&self) -> Option<&Theme> {
        self.active.as_deref().and_then(|id| self.registry.get(id))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether appearance changes are currently re-applied.
    pub fn follows_system(&self) -> bool {
        self.follow_system
    }

    /// Resolves the startup theme without side effects.
    ///
    /// A stored registry member wins; otherwise a light OS appearance
    /// resolves to `light`, and everything else to `dark`. The result is
    /// always a registry member.
    pub fn resolve_initial(&self) -> &str {
        if let Some(theme) = self.store.load().and_then(|id| self.registry.get(&id)) {
            return theme.id();
        }
        match detect_color_mode() {
            ColorMode::Light => self.registry.normalize("light"),
            ColorMode::Dark => DEFAULT_THEME,
        }
    }

    /// Runs the startup sequence against `surface`.
    ///
    /// When the surface reports no header region the picker does nothing:
    /// no theme is applied, nothing is broadcast, and appearance changes
    /// stay ignored. Otherwise the initial theme is resolved and applied,
    /// the selector syncs to it, and the picker follows the system iff no
    /// stored choice resolved to a registry member.
    ///
    /// Returns whether the widget mounted.
    pub fn mount(&mut self, surface: &mut dyn Surface) -> bool {
        if !surface.mount(&self.selector) {
            log::debug!("no header region; theme picker not mounted");
            return false;
        }

        self.follow_system = self.stored_choice().is_none();
        let initial = self.resolve_initial().to_string();
        self.apply(surface, &initial);
        self.selector.set_value(&initial);
        self.mounted = true;
        log::debug!(
            "theme picker mounted with '{initial}' (follow_system: {})",
            self.follow_system
        );
        true
    }

    /// Applies a candidate id: unknown ids fall back to `dark`, the
    /// resolved id lands on the surface, and subscribers are notified.
    ///
    /// Never fails; invalid input is silently normalized.
    pub fn apply(&mut self, surface: &mut dyn Surface, id: &str) {
        let resolved = self.registry.normalize(id).to_string();
        surface.apply_theme(&resolved);

        let event = ThemeChanged {
            theme: resolved.clone(),
        };
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }

        self.active = Some(resolved);
    }

    /// Best-effort write of `id` to the choice store.
    pub fn persist(&self, id: &str) {
        if let Err(err) = self.store.save(id) {
            log::warn!("failed to persist theme choice '{id}': {err}");
        }
    }

    /// Handles a user selection: apply, persist, and sync the displayed
    /// value.
    pub fn select(&mut self, surface: &mut dyn Surface, id: &str) {
        let resolved = self.registry.normalize(id).to_string();
        self.apply(surface, &resolved);
        self.persist(&resolved);
        self.selector.set_value(&resolved);
    }

    /// Handles an OS appearance change.
    ///
    /// Ignored unless the picker is mounted and following the system;
    /// otherwise re-applies `light`/`dark` and syncs the displayed value.
    /// The change is not persisted.
    pub fn system_changed(&mut self, surface: &mut dyn Surface, mode: ColorMode) {
        if !self.mounted || !self.follow_system {
            return;
        }
        let id = self.registry.normalize(mode.theme_id()).to_string();
        self.apply(surface, &id);
        self.selector.set_value(&id);
    }

    /// Polls the appearance detector and re-applies if following the
    /// system. For hosts without their own appearance watcher.
    pub fn refresh(&mut self, surface: &mut dyn Surface) {
        let mode = detect_color_mode();
        self.system_changed(surface, mode);
    }

    fn stored_choice(&self) -> Option<String> {
        self.store.load().filter(|id| self.registry.contains(id))
    }
}
