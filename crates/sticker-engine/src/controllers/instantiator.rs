use core::fmt;
use core::hash::Hash;

use log::{debug, warn};
use rand::Rng;

use crate::capability::Capabilities;
use crate::coords::InstantiationArea;
use crate::error::SetupError;
use crate::hints::{HintManager, HINT_ROTATE, HINT_TAP};
use crate::host::StickerHost;
use crate::layer::RenderOrderStack;

use super::sticker::OPACITY_DEFAULT;
use super::SharedStack;

/// A button that spawns stickers wearing its own texture.
pub struct InstantiatorController<N, L, P> {
    button: N,
    parent: N,
    prefab: P,
    area: InstantiationArea,
    stack: SharedStack<N, L>,
}

impl<N, L, P> InstantiatorController<N, L, P>
where
    N: Copy + Eq + Hash + fmt::Debug + 'static,
    L: Copy + Eq + fmt::Debug + 'static,
{
    /// Binds `button`, spawning `prefab` under `parent`.
    ///
    /// `parent` must already publish a render-order stack in `caps`.
    pub fn new<H>(
        host: &H,
        caps: &Capabilities<N>,
        button: N,
        parent: N,
        prefab: P,
        area: InstantiationArea,
    ) -> Result<Self, SetupError>
    where
        H: StickerHost<Node = N, Layer = L, Prefab = P> + ?Sized,
    {
        if host.layers_on(button).is_empty() {
            return Err(SetupError::MissingVisual { node: host.name(button).to_string() });
        }
        let Some(stack) = caps.lookup::<RenderOrderStack<N, L>>(parent) else {
            return Err(SetupError::MissingStack { parent: host.name(parent).to_string() });
        };

        Ok(Self {
            button,
            parent,
            prefab,
            area: area.normalized(),
            stack,
        })
    }

    #[inline]
    pub fn button(&self) -> N {
        self.button
    }

    #[inline]
    pub fn parent(&self) -> N {
        self.parent
    }

    #[inline]
    pub fn area(&self) -> InstantiationArea {
        self.area
    }

    /// Spawns a sticker somewhere inside the area and returns it.
    ///
    /// The new sticker takes the button's texture and lands on top of the
    /// stack; the "rotate" hint is moved onto it.
    pub fn instantiate_image<H, R>(&self, host: &mut H, hints: &mut HintManager<H>, rng: &mut R) -> N
    where
        H: StickerHost<Node = N, Layer = L, Prefab = P>,
        R: Rng + ?Sized,
    {
        let sticker = host.instantiate(&self.prefab, self.parent);

        let at = self.area.sample(rng);
        if !host.set_anchor_center(sticker, at) {
            warn!("sticker `{}` has no screen transform; left at prefab position", host.name(sticker));
        }

        match host.texture(self.button) {
            Some(texture) => host.set_texture(sticker, texture),
            None => warn!("button `{}` has no texture to copy", host.name(self.button)),
        }
        host.set_opacity(sticker, OPACITY_DEFAULT);

        {
            let mut stack = self.stack.borrow_mut();
            stack.rescan(&*host);
            stack.sort_by_render_order(&*host);
            match host.layers_on(sticker).first() {
                Some(&visual) => stack.send_to_front(host, visual),
                None => warn!("sticker `{}` has no visual to bring to front", host.name(sticker)),
            }
            stack.normalize(host);
        }

        hints.set_position_to_object(host, HINT_ROTATE, sticker);
        hints.show(host, HINT_ROTATE);

        debug!("instantiated {sticker:?} from {:?} at {at:?}", self.button);
        sticker
    }

    /// The "tap" hint has done its job once a button is pressed.
    pub fn on_touch_start<H, R>(&self, host: &mut H, hints: &mut HintManager<H>, rng: &mut R) -> N
    where
        H: StickerHost<Node = N, Layer = L, Prefab = P>,
        R: Rng + ?Sized,
    {
        hints.hide(host, HINT_TAP);
        hints.set_enabled(HINT_TAP, false);
        self.instantiate_image(host, hints, rng)
    }
}

impl<N: fmt::Debug, L, P> fmt::Debug for InstantiatorController<N, L, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstantiatorController")
            .field("button", &self.button)
            .field("parent", &self.parent)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::controllers::install_render_order_stack;
    use crate::coords::Vec2;
    use crate::hints::{HintItem, VisibilityHint};
    use crate::host::{Hierarchy, LayerHost, ScreenHost, TextureKey};
    use crate::layer::RenderOrder;
    use crate::scene::{NodeId, NodeTemplate, SceneGraph, Visual, VisualId};

    struct Fixture {
        scene: SceneGraph,
        caps: Capabilities<NodeId>,
        hints: HintManager<SceneGraph>,
        parent: NodeId,
        button: NodeId,
        prefab: NodeTemplate,
    }

    fn fixture() -> Fixture {
        let mut scene = SceneGraph::new();
        let parent = scene.create_node("Stickers", None);
        scene.spawn(
            &NodeTemplate::new("Old").visual(Visual::new(RenderOrder::new(4))).anchor(Vec2::zero()),
            Some(parent),
        );
        let button = scene.spawn(
            &NodeTemplate::new("Button")
                .visual(Visual::new(RenderOrder::new(50)).with_texture(TextureKey::new("cat"))),
            None,
        );
        let tap = scene.spawn(&NodeTemplate::new("TapHint").anchor(Vec2::zero()), None);
        let rotate = scene.spawn(&NodeTemplate::new("RotateHint").anchor(Vec2::zero()).disabled(), None);

        let mut caps = Capabilities::new();
        install_render_order_stack(&mut caps, &scene, parent);
        let hints = HintManager::<SceneGraph>::new([
            HintItem::new(HINT_TAP, tap, VisibilityHint),
            HintItem::new(HINT_ROTATE, rotate, VisibilityHint),
        ]);
        let prefab = NodeTemplate::new("Sticker")
            .visual(Visual::new(RenderOrder::new(10)))
            .anchor(Vec2::zero());

        Fixture { scene, caps, hints, parent, button, prefab }
    }

    #[test]
    fn spawned_sticker_copies_texture_and_lands_in_area() {
        let mut f = fixture();
        let area = InstantiationArea::new(-0.5, 0.5, 0.0, 0.25);
        let inst = InstantiatorController::new(&f.scene, &f.caps, f.button, f.parent, f.prefab.clone(), area).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..8 {
            let sticker = inst.instantiate_image(&mut f.scene, &mut f.hints, &mut rng);
            assert_eq!(f.scene.parent(sticker), Some(f.parent));
            assert_eq!(f.scene.texture(sticker), Some(TextureKey::new("cat")));
            assert_eq!(f.scene.visual(sticker).unwrap().opacity, OPACITY_DEFAULT);
            assert!(area.contains(f.scene.anchor_center(sticker).unwrap()));
        }
    }

    #[test]
    fn spawned_sticker_is_top_of_a_contiguous_stack() {
        let mut f = fixture();
        let inst = InstantiatorController::new(
            &f.scene,
            &f.caps,
            f.button,
            f.parent,
            f.prefab.clone(),
            InstantiationArea::default(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        inst.instantiate_image(&mut f.scene, &mut f.hints, &mut rng);
        let newest = inst.instantiate_image(&mut f.scene, &mut f.hints, &mut rng);

        let stack = f.caps.lookup::<RenderOrderStack<NodeId, VisualId>>(f.parent).unwrap();
        let stack = stack.borrow();
        assert_eq!(stack.len(), 3);
        assert_eq!(f.scene.owner(*stack.layers().last().unwrap()), newest);
        let orders: Vec<i32> = stack.snapshot(&f.scene).iter().map(|e| e.render_order.get()).collect();
        assert_eq!(orders, vec![8, 9, 10]);
    }

    #[test]
    fn spawning_keeps_earlier_reorders() {
        let mut f = fixture();
        let old = f.scene.child(f.parent, 0).unwrap();
        let newer = f.scene.spawn(
            &NodeTemplate::new("Newer").visual(Visual::new(RenderOrder::new(6))).anchor(Vec2::zero()),
            Some(f.parent),
        );
        let stack = f.caps.lookup::<RenderOrderStack<NodeId, VisualId>>(f.parent).unwrap();
        stack.borrow_mut().rescan(&f.scene);
        let old_visual = f.scene.layers_on(old)[0];
        stack.borrow_mut().send_to_front(&mut f.scene, old_visual);

        let inst = InstantiatorController::new(
            &f.scene,
            &f.caps,
            f.button,
            f.parent,
            f.prefab.clone(),
            InstantiationArea::default(),
        )
        .unwrap();
        let sticker = inst.instantiate_image(&mut f.scene, &mut f.hints, &mut StdRng::seed_from_u64(5));

        let owners: Vec<NodeId> = stack.borrow().layers().iter().map(|&l| f.scene.owner(l)).collect();
        assert_eq!(owners, vec![newer, old, sticker]);
        let orders: Vec<i32> = stack.borrow().snapshot(&f.scene).iter().map(|e| e.render_order.get()).collect();
        assert_eq!(orders, vec![8, 9, 10]);
    }

    #[test]
    fn sticker_spawned_below_existing_orders_still_lands_on_top() {
        let mut f = fixture();
        let prefab = NodeTemplate::new("Sticker").visual(Visual::new(RenderOrder::new(0))).anchor(Vec2::zero());
        let inst = InstantiatorController::new(&f.scene, &f.caps, f.button, f.parent, prefab, InstantiationArea::default())
            .unwrap();

        let sticker = inst.instantiate_image(&mut f.scene, &mut f.hints, &mut StdRng::seed_from_u64(9));

        let stack = f.caps.lookup::<RenderOrderStack<NodeId, VisualId>>(f.parent).unwrap();
        assert_eq!(f.scene.owner(*stack.borrow().layers().last().unwrap()), sticker);
        let orders: Vec<i32> = stack.borrow().snapshot(&f.scene).iter().map(|e| e.render_order.get()).collect();
        assert_eq!(orders, vec![3, 4]);
    }

    #[test]
    fn rotate_hint_follows_new_sticker() {
        let mut f = fixture();
        let inst = InstantiatorController::new(
            &f.scene,
            &f.caps,
            f.button,
            f.parent,
            f.prefab.clone(),
            InstantiationArea::default(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let sticker = inst.instantiate_image(&mut f.scene, &mut f.hints, &mut rng);

        let rotate = f.hints.node(HINT_ROTATE).unwrap();
        assert!(f.scene.is_enabled(rotate));
        assert_eq!(f.scene.anchor_center(rotate), f.scene.anchor_center(sticker));
    }

    #[test]
    fn pressing_the_button_retires_the_tap_hint() {
        let mut f = fixture();
        let inst = InstantiatorController::new(
            &f.scene,
            &f.caps,
            f.button,
            f.parent,
            f.prefab.clone(),
            InstantiationArea::default(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        inst.on_touch_start(&mut f.scene, &mut f.hints, &mut rng);
        f.hints.show(&mut f.scene, HINT_TAP);

        let tap = f.hints.node(HINT_TAP).unwrap();
        assert!(!f.scene.is_enabled(tap));
        assert!(!f.hints.is_enabled(HINT_TAP));
    }

    #[test]
    fn setup_errors() {
        let mut f = fixture();
        let bare = f.scene.create_node("BareButton", None);
        let area = InstantiationArea::default();

        let err = InstantiatorController::new(&f.scene, &f.caps, bare, f.parent, f.prefab.clone(), area).unwrap_err();
        assert_eq!(err, SetupError::MissingVisual { node: "BareButton".into() });

        let elsewhere = f.scene.create_node("Elsewhere", None);
        let err = InstantiatorController::new(&f.scene, &f.caps, f.button, elsewhere, f.prefab.clone(), area).unwrap_err();
        assert_eq!(err, SetupError::MissingStack { parent: "Elsewhere".into() });
    }
}
