//! Off-browser stand-ins for the drag target and the document listener host.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::drag::{DragTarget, MoveHandler, MoveListenerHost, Position};
use crate::mouse::PointerEvent;

/// Records every position written to it.
#[derive(Clone)]
pub struct RecordingTarget {
    width: f32,
    position: Rc<Cell<Option<Position>>>,
    writes: Rc<Cell<usize>>,
}

impl RecordingTarget {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            position: Default::default(),
            writes: Default::default(),
        }
    }

    pub fn position(&self) -> Option<Position> {
        self.position.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl DragTarget for RecordingTarget {
    fn width(&self) -> f32 {
        self.width
    }

    fn set_position(&self, position: Position) {
        self.position.set(Some(position));
        self.writes.set(self.writes.get() + 1);
    }
}

/// Listener slots, indexed by subscription. Removed listeners leave `None`.
type Slots = Rc<RefCell<Vec<Option<MoveHandler>>>>;

#[derive(Clone, Default)]
pub struct ListenerHost {
    slots: Slots,
    fail_next: Rc<Cell<bool>>,
}

impl ListenerHost {
    /// Makes the next `subscribe` call fail.
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    pub fn active(&self) -> usize {
        self.slots.borrow().iter().filter(|slot| slot.is_some()).count()
    }

    pub fn installs(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn dispatch(&self, event: &dyn PointerEvent) {
        for slot in self.slots.borrow_mut().iter_mut() {
            if let Some(handler) = slot {
                handler(event);
            }
        }
    }
}

pub struct Subscription {
    index: usize,
    slots: Slots,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.slots.borrow_mut()[self.index] = None;
    }
}

impl MoveListenerHost for ListenerHost {
    type Subscription = Subscription;

    fn subscribe(&self, handler: MoveHandler) -> anyhow::Result<Subscription> {
        if self.fail_next.replace(false) {
            anyhow::bail!("listener registration refused");
        }
        let mut slots = self.slots.borrow_mut();
        slots.push(Some(handler));
        Ok(Subscription {
            index: slots.len() - 1,
            slots: self.slots.clone(),
        })
    }
}
