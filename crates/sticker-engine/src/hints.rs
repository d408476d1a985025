//! Named UI hints ("tap", "rotate", ...).
//!
//! [`HintManager`] is an ordinary service object: build it once at startup and
//! pass it to whichever controllers need to show or hide hints.

use std::collections::HashMap;

use log::warn;

use crate::host::ScreenHost;

/// Hint names used by the sticker controllers.
pub const HINT_TAP: &str = "tap";
pub const HINT_ROTATE: &str = "rotate";

/// Drives the presentation of a single hint.
pub trait HintController<H: ScreenHost + ?Sized> {
    fn show_hint(&mut self, host: &mut H, node: H::Node);
    fn hide_hint(&mut self, host: &mut H, node: H::Node);
}

/// Shows a hint by enabling its node and hides it by disabling it.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisibilityHint;

impl<H: ScreenHost + ?Sized> HintController<H> for VisibilityHint {
    fn show_hint(&mut self, host: &mut H, node: H::Node) {
        host.set_enabled(node, true);
    }

    fn hide_hint(&mut self, host: &mut H, node: H::Node) {
        host.set_enabled(node, false);
    }
}

/// Registration record for [`HintManager::new`].
pub struct HintItem<H: ScreenHost> {
    pub name: String,
    pub node: H::Node,
    /// Show at most once per manager lifetime.
    pub show_once: bool,
    pub controller: Option<Box<dyn HintController<H>>>,
}

impl<H: ScreenHost> HintItem<H> {
    pub fn new(name: impl Into<String>, node: H::Node, controller: impl HintController<H> + 'static) -> Self {
        Self {
            name: name.into(),
            node,
            show_once: false,
            controller: Some(Box::new(controller)),
        }
    }

    pub fn show_once(mut self, show_once: bool) -> Self {
        self.show_once = show_once;
        self
    }
}

struct HintEntry<H: ScreenHost> {
    node: H::Node,
    controller: Option<Box<dyn HintController<H>>>,
    show_once: bool,
    enabled: bool,
    shown: bool,
}

/// Name-keyed registry of hints.
///
/// Unknown names are ignored by every operation.
pub struct HintManager<H: ScreenHost> {
    entries: HashMap<String, HintEntry<H>>,
}

impl<H: ScreenHost> Default for HintManager<H> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<H: ScreenHost> HintManager<H> {
    pub fn new(items: impl IntoIterator<Item = HintItem<H>>) -> Self {
        let mut entries = HashMap::new();
        for item in items {
            if item.controller.is_none() {
                warn!("no hint controller found for hint `{}`", item.name);
            }
            entries.insert(
                item.name,
                HintEntry {
                    node: item.node,
                    controller: item.controller,
                    show_once: item.show_once,
                    enabled: true,
                    shown: false,
                },
            );
        }
        Self { entries }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Node presenting the hint.
    pub fn node(&self, name: &str) -> Option<H::Node> {
        self.entries.get(name).map(|e| e.node)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|e| e.enabled)
    }

    /// Whether a controller has shown the hint at least once.
    pub fn was_shown(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|e| e.shown)
    }

    /// Shows the hint unless it is disabled or is a show-once hint already shown.
    pub fn show(&mut self, host: &mut H, name: &str) {
        let Some(entry) = self.entries.get_mut(name) else {
            return;
        };
        if !entry.enabled || (entry.show_once && entry.shown) {
            return;
        }
        if let Some(controller) = entry.controller.as_mut() {
            controller.show_hint(host, entry.node);
            entry.shown = true;
        }
    }

    pub fn hide(&mut self, host: &mut H, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            if let Some(controller) = entry.controller.as_mut() {
                controller.hide_hint(host, entry.node);
            }
        }
    }

    /// Disabled hints ignore [`show`](Self::show); hiding still works.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.enabled = enabled;
        }
    }

    /// Centers the hint on `target`'s anchors, if `target` has a screen transform.
    pub fn set_position_to_object(&mut self, host: &mut H, name: &str, target: H::Node) {
        let Some(entry) = self.entries.get(name) else {
            warn!("cannot position unknown hint `{name}`");
            return;
        };
        if let Some(center) = host.anchor_center(target) {
            if !host.set_anchor_center(entry.node, center) {
                warn!("hint `{name}` has no screen transform");
            }
        }
    }
}
