use std::collections::HashMap;

use log::{debug, error, info, warn};
use rand::rngs::StdRng;

use crate::capability::Capabilities;
use crate::config::MemeStickerConfig;
use crate::delete::Deleter;
use crate::error::SetupError;
use crate::hints::{HintManager, HINT_TAP};
use crate::host::StickerHost;
use crate::input::{TouchEvent, TouchPhase};

use super::instantiator::InstantiatorController;
use super::sticker::{StickerController, StickerOutcome};
use super::{install_render_order_stack, SharedStack};

/// Scene objects a [`MemeSticker`] session is wired to.
pub struct MemeStickerBindings<H: StickerHost> {
    /// Container whose children are the placed stickers.
    pub stickers_parent: H::Node,
    pub sticker_prefab: H::Prefab,
    /// Container the instantiator buttons are created under.
    pub buttons_parent: H::Node,
    pub button_prefab: H::Prefab,
    /// Root of the delete UI; disabled outright when deletion is off.
    pub delete_target: H::Node,
    /// Node whose screen position arms deletion.
    pub delete_ui: H::Node,
}

/// What [`MemeSticker::handle_touch`] did with an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchResponse<N> {
    /// The touch did not land on a bound button or sticker.
    Ignored,
    Handled,
    /// A button press spawned this sticker.
    Instantiated(N),
    /// This sticker was dropped on the delete UI and destroyed.
    Deleted(N),
}

/// A running sticker template.
///
/// Owns the render-order stack of the stickers container, one instantiator
/// per configured texture, and a controller per live sticker. The host is
/// borrowed per call so it can be shared with whatever else drives the scene.
pub struct MemeSticker<H: StickerHost> {
    config: MemeStickerConfig,
    hints: HintManager<H>,
    caps: Capabilities<H::Node>,
    stack: SharedStack<H::Node, H::Layer>,
    deleter: Option<Deleter<H::Node>>,
    instantiators: Vec<InstantiatorController<H::Node, H::Layer, H::Prefab>>,
    stickers: HashMap<H::Node, StickerController<H::Node, H::Layer>>,
    stickers_parent: H::Node,
    buttons_parent: H::Node,
    rng: StdRng,
}

impl<H> MemeSticker<H>
where
    H: StickerHost,
    H::Prefab: Clone,
{
    /// Wires the session into `host`.
    ///
    /// Stickers already under the stickers container are picked up as-is.
    /// Buttons whose prefab has no image are reported and skipped; a bad
    /// delete UI fails the whole setup.
    pub fn new(
        host: &mut H,
        config: MemeStickerConfig,
        bindings: MemeStickerBindings<H>,
        hints: HintManager<H>,
        rng: StdRng,
    ) -> Result<Self, SetupError> {
        let MemeStickerBindings {
            stickers_parent,
            sticker_prefab,
            buttons_parent,
            button_prefab,
            delete_target,
            delete_ui,
        } = bindings;

        let mut caps = Capabilities::new();
        let stack = install_render_order_stack(&mut caps, &*host, stickers_parent);

        let deleter = if config.deletable {
            Some(Deleter::new(host, delete_ui, config.distance_to_activate)?)
        } else {
            host.set_enabled(delete_target, false);
            None
        };

        let mut instantiators = Vec::with_capacity(config.textures.len());
        for texture in &config.textures {
            let button = host.instantiate(&button_prefab, buttons_parent);
            host.set_texture(button, texture.clone());
            match InstantiatorController::new(
                &*host,
                &caps,
                button,
                stickers_parent,
                sticker_prefab.clone(),
                config.instantiation_area,
            ) {
                Ok(inst) => instantiators.push(inst),
                Err(err) => {
                    error!("skipping button for `{texture}`: {err}");
                    host.destroy(button);
                }
            }
        }

        let mut session = Self {
            config,
            hints,
            caps,
            stack,
            deleter,
            instantiators,
            stickers: HashMap::new(),
            stickers_parent,
            buttons_parent,
            rng,
        };

        let existing: Vec<H::Node> = (0..host.child_count(stickers_parent))
            .filter_map(|i| host.child(stickers_parent, i))
            .collect();
        for node in existing {
            session.bind_sticker(host, node);
        }

        if !session.config.show_instantiator {
            host.set_enabled(buttons_parent, false);
            session.hints.hide(host, HINT_TAP);
            session.hints.set_enabled(HINT_TAP, false);
        }

        if session.config.auto_instantiate_first {
            if let Some(first) = session.instantiators.first() {
                let sticker = first.instantiate_image(host, &mut session.hints, &mut session.rng);
                session.bind_sticker(host, sticker);
            } else {
                warn!("auto-instantiate requested but no instantiator buttons were created");
            }
        }

        info!(
            "meme sticker session ready: {} button(s), {} sticker(s)",
            session.instantiators.len(),
            session.stickers.len()
        );
        Ok(session)
    }

    /// Routes a touch to the button or sticker that owns `event.target`.
    ///
    /// Touches on a descendant of a bound node go to that node.
    pub fn handle_touch(&mut self, host: &mut H, event: TouchEvent<H::Node>) -> TouchResponse<H::Node> {
        let Some(target) = self.resolve(&*host, event.target) else {
            debug!("touch {} on {:?} ignored", event.phase, event.target);
            return TouchResponse::Ignored;
        };

        if let Some(inst) = self.instantiators.iter().find(|i| i.button() == target) {
            if event.phase != TouchPhase::Start {
                return TouchResponse::Handled;
            }
            let sticker = inst.on_touch_start(host, &mut self.hints, &mut self.rng);
            self.bind_sticker(host, sticker);
            return TouchResponse::Instantiated(sticker);
        }

        let Some(controller) = self.stickers.get_mut(&target) else {
            return TouchResponse::Ignored;
        };
        let deleter = self.deleter.as_ref();
        match event.phase {
            TouchPhase::Start => controller.on_touch_start(host, &mut self.hints, deleter),
            TouchPhase::Move => controller.on_touch_move(host, deleter),
            TouchPhase::End => {
                if controller.on_touch_end(host, deleter) == StickerOutcome::Deleted {
                    self.stickers.remove(&target);
                    self.caps.withdraw(target);
                    return TouchResponse::Deleted(target);
                }
            }
        }
        TouchResponse::Handled
    }

    /// Spawns a sticker from the `index`-th button as if it had been pressed.
    pub fn instantiate_from(&mut self, host: &mut H, index: usize) -> Option<H::Node> {
        let inst = self.instantiators.get(index)?;
        let sticker = inst.instantiate_image(host, &mut self.hints, &mut self.rng);
        self.bind_sticker(host, sticker);
        Some(sticker)
    }

    #[inline]
    pub fn config(&self) -> &MemeStickerConfig {
        &self.config
    }

    #[inline]
    pub fn hints(&self) -> &HintManager<H> {
        &self.hints
    }

    #[inline]
    pub fn hints_mut(&mut self) -> &mut HintManager<H> {
        &mut self.hints
    }

    #[inline]
    pub fn capabilities(&self) -> &Capabilities<H::Node> {
        &self.caps
    }

    /// Render-order stack of the stickers container.
    #[inline]
    pub fn stack(&self) -> &SharedStack<H::Node, H::Layer> {
        &self.stack
    }

    #[inline]
    pub fn deleter(&self) -> Option<&Deleter<H::Node>> {
        self.deleter.as_ref()
    }

    pub fn buttons(&self) -> Vec<H::Node> {
        self.instantiators.iter().map(|i| i.button()).collect()
    }

    pub fn is_sticker(&self, node: H::Node) -> bool {
        self.stickers.contains_key(&node)
    }

    #[inline]
    pub fn sticker_count(&self) -> usize {
        self.stickers.len()
    }

    #[inline]
    pub fn stickers_parent(&self) -> H::Node {
        self.stickers_parent
    }

    #[inline]
    pub fn buttons_parent(&self) -> H::Node {
        self.buttons_parent
    }

    fn bind_sticker(&mut self, host: &H, node: H::Node) {
        match StickerController::new(host, &self.caps, node, self.config.deletable) {
            Ok(controller) => {
                self.stickers.insert(node, controller);
            }
            Err(err) => error!("cannot control sticker: {err}"),
        }
    }

    /// Nearest bound button or sticker at or above `node`.
    fn resolve(&self, host: &H, node: H::Node) -> Option<H::Node> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.stickers.contains_key(&n) || self.instantiators.iter().any(|i| i.button() == n) {
                return Some(n);
            }
            current = host.parent(n);
        }
        None
    }
}
