//! Drag-to-delete.
//!
//! While an object with a [`Deletable`] is touched, the [`Deleter`]'s delete
//! UI is shown. Dragging the object within `distance_to_activate` of the
//! delete UI (in screen space) marks it pending; releasing it there asks the
//! owner to delete it.

use core::fmt;

use log::debug;

use crate::error::SetupError;
use crate::host::ScreenHost;

/// The delete drop-target.
#[derive(Debug, Clone, Copy)]
pub struct Deleter<N> {
    delete_ui: N,
    distance_to_activate: f32,
}

impl<N: Copy + fmt::Debug> Deleter<N> {
    /// Binds the delete UI and hides it.
    pub fn new<H>(host: &mut H, delete_ui: N, distance_to_activate: f32) -> Result<Self, SetupError>
    where
        H: ScreenHost<Node = N> + ?Sized,
    {
        if !(distance_to_activate > 0.0) {
            return Err(SetupError::InvalidActivationDistance(distance_to_activate));
        }

        let deleter = Self { delete_ui, distance_to_activate };
        deleter.hide(host);
        Ok(deleter)
    }

    #[inline]
    pub fn delete_ui(&self) -> N {
        self.delete_ui
    }

    #[inline]
    pub fn distance_to_activate(&self) -> f32 {
        self.distance_to_activate
    }

    pub fn show<H: ScreenHost<Node = N> + ?Sized>(&self, host: &mut H) {
        host.set_enabled(self.delete_ui, true);
    }

    pub fn hide<H: ScreenHost<Node = N> + ?Sized>(&self, host: &mut H) {
        host.set_enabled(self.delete_ui, false);
    }

    /// True when `object` is strictly closer than the activation distance.
    ///
    /// Objects (or a delete UI) the host cannot project are never pending.
    pub fn is_pending_delete<H: ScreenHost<Node = N> + ?Sized>(&self, host: &H, object: N) -> bool {
        let (Some(ui), Some(obj)) = (host.screen_position(self.delete_ui), host.screen_position(object)) else {
            debug!("no screen position for {object:?} or delete UI; not pending");
            return false;
        };
        ui.distance(obj) < self.distance_to_activate
    }
}

/// Report from a [`Deletable`] gesture step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DeletableEvent {
    /// The object moved; `pending` says whether a release now would delete it.
    Interaction { pending: bool },
    /// The object was released over the delete UI.
    ShouldDelete,
}

/// Per-object drag-to-delete gesture state.
#[derive(Debug, Default, Clone, Copy)]
pub struct Deletable {
    pending: bool,
}

impl Deletable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn on_touch_start<N, H>(&mut self, host: &mut H, deleter: &Deleter<N>)
    where
        N: Copy + fmt::Debug,
        H: ScreenHost<Node = N> + ?Sized,
    {
        self.pending = false;
        deleter.show(host);
    }

    pub fn on_touch_move<N, H>(&mut self, host: &H, deleter: &Deleter<N>, object: N) -> DeletableEvent
    where
        N: Copy + fmt::Debug,
        H: ScreenHost<Node = N> + ?Sized,
    {
        self.pending = deleter.is_pending_delete(host, object);
        DeletableEvent::Interaction { pending: self.pending }
    }

    /// Hides the delete UI; returns `ShouldDelete` if released while pending.
    pub fn on_touch_end<N, H>(&mut self, host: &mut H, deleter: &Deleter<N>) -> Option<DeletableEvent>
    where
        N: Copy + fmt::Debug,
        H: ScreenHost<Node = N> + ?Sized,
    {
        deleter.hide(host);
        core::mem::take(&mut self.pending).then_some(DeletableEvent::ShouldDelete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::host::Hierarchy;
    use crate::scene::{NodeId, NodeTemplate, SceneGraph};

    fn setup() -> (SceneGraph, Deleter<NodeId>, NodeId) {
        let mut scene = SceneGraph::new();
        let ui = scene.spawn(&NodeTemplate::new("DeleteUI").anchor(Vec2::new(0.0, -0.8)), None);
        let sticker = scene.spawn(&NodeTemplate::new("Sticker").anchor(Vec2::zero()), None);
        let deleter = Deleter::new(&mut scene, ui, 0.1).unwrap();
        (scene, deleter, sticker)
    }

    #[test]
    fn starts_hidden() {
        let (scene, deleter, _) = setup();
        assert!(!scene.is_enabled(deleter.delete_ui()));
    }

    #[test]
    fn rejects_non_positive_distance() {
        let mut scene = SceneGraph::new();
        let ui = scene.create_node("DeleteUI", None);
        assert_eq!(
            Deleter::new(&mut scene, ui, 0.0).unwrap_err(),
            SetupError::InvalidActivationDistance(0.0)
        );
        assert!(Deleter::new(&mut scene, ui, f32::NAN).is_err());
    }

    #[test]
    fn pending_only_inside_radius() {
        let (mut scene, deleter, sticker) = setup();
        assert!(!deleter.is_pending_delete(&scene, sticker));

        scene.set_anchor(sticker, Vec2::new(0.05, -0.75));
        assert!(deleter.is_pending_delete(&scene, sticker));
    }

    #[test]
    fn unprojectable_object_is_never_pending() {
        let (mut scene, deleter, _) = setup();
        let floating = scene.create_node("World", None);
        assert!(!deleter.is_pending_delete(&scene, floating));
    }

    #[test]
    fn release_over_target_requests_delete() {
        let (mut scene, deleter, sticker) = setup();
        let mut deletable = Deletable::new();

        deletable.on_touch_start(&mut scene, &deleter);
        assert!(scene.is_enabled(deleter.delete_ui()));

        scene.set_anchor(sticker, Vec2::new(0.0, -0.78));
        assert_eq!(
            deletable.on_touch_move(&scene, &deleter, sticker),
            DeletableEvent::Interaction { pending: true }
        );

        assert_eq!(deletable.on_touch_end(&mut scene, &deleter), Some(DeletableEvent::ShouldDelete));
        assert!(!scene.is_enabled(deleter.delete_ui()));
        assert!(!deletable.is_pending());
    }

    #[test]
    fn release_elsewhere_keeps_object() {
        let (mut scene, deleter, sticker) = setup();
        let mut deletable = Deletable::new();

        deletable.on_touch_start(&mut scene, &deleter);
        scene.set_anchor(sticker, Vec2::new(0.0, -0.78));
        deletable.on_touch_move(&scene, &deleter, sticker);
        scene.set_anchor(sticker, Vec2::new(0.5, 0.5));
        assert_eq!(
            deletable.on_touch_move(&scene, &deleter, sticker),
            DeletableEvent::Interaction { pending: false }
        );

        assert_eq!(deletable.on_touch_end(&mut scene, &deleter), None);
    }
}
