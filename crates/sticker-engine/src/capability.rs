//! Type-keyed capabilities attached to scene nodes.
//!
//! Controllers publish shared state on the node they are bound to, and other
//! controllers resolve it by node and Rust type. A sticker, for example, finds
//! its container's render-order stack by asking the parent node for a
//! [`SharedStack`](crate::layer::RenderOrderStack).

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

/// Registry of `(node, type) -> Rc<RefCell<T>>` entries.
pub struct Capabilities<N> {
    slots: HashMap<(N, TypeId), Rc<dyn Any>>,
}

impl<N> Default for Capabilities<N> {
    fn default() -> Self {
        Self { slots: HashMap::new() }
    }
}

impl<N> std::fmt::Debug for Capabilities<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("entries", &self.slots.len())
            .finish()
    }
}

impl<N: Copy + Eq + Hash> Capabilities<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `value` on `node`, replacing any earlier value of the same type.
    pub fn provide<T: Any>(&mut self, node: N, value: Rc<RefCell<T>>) {
        self.slots.insert((node, TypeId::of::<T>()), value);
    }

    /// Resolves the `T` published on `node`.
    pub fn lookup<T: Any>(&self, node: N) -> Option<Rc<RefCell<T>>> {
        self.slots
            .get(&(node, TypeId::of::<T>()))
            .cloned()
            .and_then(|rc| rc.downcast::<RefCell<T>>().ok())
    }

    pub fn has<T: Any>(&self, node: N) -> bool {
        self.slots.contains_key(&(node, TypeId::of::<T>()))
    }

    /// Drops everything published on `node`.
    pub fn withdraw(&mut self, node: N) {
        self.slots.retain(|(n, _), _| *n != node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Counter(u32);

    #[derive(Debug, PartialEq)]
    struct Label(&'static str);

    #[test]
    fn lookup_by_node_and_type() {
        let mut caps = Capabilities::new();
        let counter = Rc::new(RefCell::new(Counter(1)));
        caps.provide(7u32, counter.clone());
        caps.provide(7u32, Rc::new(RefCell::new(Label("parent"))));

        counter.borrow_mut().0 = 5;

        assert_eq!(*caps.lookup::<Counter>(7).unwrap().borrow(), Counter(5));
        assert_eq!(*caps.lookup::<Label>(7).unwrap().borrow(), Label("parent"));
        assert!(caps.lookup::<Counter>(8).is_none());
    }

    #[test]
    fn withdraw_clears_only_that_node() {
        let mut caps = Capabilities::new();
        caps.provide(1u32, Rc::new(RefCell::new(Counter(1))));
        caps.provide(2u32, Rc::new(RefCell::new(Counter(2))));

        caps.withdraw(1);

        assert!(!caps.has::<Counter>(1));
        assert!(caps.has::<Counter>(2));
    }
}
