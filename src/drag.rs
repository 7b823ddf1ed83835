use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::{
    input::{DragPhase, DragState},
    mouse::PointerEvent,
};

/// Added to the recentered horizontal position.
pub const HORIZONTAL_BIAS_PX: f32 = 5.0;
/// Subtracted from the pointer's vertical position.
pub const VERTICAL_BIAS_PX: f32 = 10.0;

/// Viewport position of the dragged element, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

impl Position {
    /// Places an element of `width` so it sits centered under `pointer`.
    pub fn under_pointer(pointer: cgmath::Vector2<f32>, width: f32) -> Self {
        Self {
            top: pointer.y - VERTICAL_BIAS_PX,
            left: pointer.x - width / 2.0 + HORIZONTAL_BIAS_PX,
        }
    }
}

/// The element being dragged.
pub trait DragTarget {
    /// Rendered width in pixels
    fn width(&self) -> f32;
    fn set_position(&self, position: Position);
}

pub type MoveHandler = Box<dyn FnMut(&dyn PointerEvent)>;

/// Where the global pointer-movement listener lives (the document, on web).
///
/// The returned subscription keeps the listener installed. Dropping it must
/// remove the listener.
pub trait MoveListenerHost {
    type Subscription;

    fn subscribe(&self, handler: MoveHandler) -> anyhow::Result<Self::Subscription>;
}

/// Turns handle press/release and pointer movement into a drag state and a
/// position written onto the target.
///
/// The movement listener is only installed while dragging. It holds a weak
/// reference back to the controller, so an installed listener never keeps the
/// controller alive, and dropping the controller removes the listener.
pub struct DragController<T, H>
where
    T: DragTarget + 'static,
    H: MoveListenerHost + 'static,
{
    this: Weak<Self>,
    state: Cell<DragState>,
    target: RefCell<Option<T>>,
    host: H,
    listener: RefCell<Option<H::Subscription>>,
}

impl<T, H> DragController<T, H>
where
    T: DragTarget + 'static,
    H: MoveListenerHost + 'static,
{
    pub fn new(host: H) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            state: Cell::new(DragState::default()),
            target: RefCell::new(None),
            host,
            listener: RefCell::new(None),
        })
    }

    pub fn with_target(host: H, target: T) -> Rc<Self> {
        let controller = Self::new(host);
        controller.attach(target);
        controller
    }

    /// Sets the element that movement repositions, returning the previous one.
    pub fn attach(&self, target: T) -> Option<T> {
        self.target.borrow_mut().replace(target)
    }

    pub fn detach(&self) -> Option<T> {
        self.target.borrow_mut().take()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.get().is_dragging
    }

    pub fn phase(&self) -> DragPhase {
        self.state.get().phase()
    }

    #[cfg(test)]
    pub(crate) fn has_listener(&self) -> bool {
        self.listener.borrow().is_some()
    }

    pub fn begin_drag(&self) {
        self.state.set(DragState { is_dragging: true });

        let mut listener = self.listener.borrow_mut();
        if listener.is_some() {
            return;
        }

        let controller = self.this.clone();
        let handler: MoveHandler = Box::new(move |event: &dyn PointerEvent| {
            if let Some(controller) = controller.upgrade() {
                controller.on_move(event);
            }
        });

        match self.host.subscribe(handler) {
            Ok(subscription) => {
                log::debug!("drag started, move listener installed");
                *listener = Some(subscription);
            }
            Err(err) => log::error!("failed to install move listener: {err:#}"),
        }
    }

    pub fn end_drag(&self) {
        self.state.set(DragState { is_dragging: false });
        if self.listener.borrow_mut().take().is_some() {
            log::debug!("drag ended, move listener removed");
        }
    }

    /// Repositions the target while dragging.
    ///
    /// The event's default action and propagation are suppressed in every
    /// state, so dragging the handle never starts a text selection or a
    /// native image drag.
    pub fn on_move(&self, event: &dyn PointerEvent) {
        if self.is_dragging() {
            if let Some(target) = self.target.borrow().as_ref() {
                let position = Position::under_pointer(event.client_pos(), target.width());
                log::trace!("moving to {position:?}");
                target.set_position(position);
            }
        }
        event.prevent_default();
        event.stop_propagation();
    }

    /// Tears the controller down with its view: any installed listener is
    /// removed and the state returns to idle.
    pub fn unmount(&self) {
        self.end_drag();
        self.detach();
    }
}

impl<T, H> Drop for DragController<T, H>
where
    T: DragTarget + 'static,
    H: MoveListenerHost + 'static,
{
    fn drop(&mut self) {
        if self.listener.get_mut().take().is_some() {
            log::debug!("controller dropped while dragging, move listener removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mouse::Mouse;
    use crate::test_utils::{ListenerHost, RecordingTarget};

    type TestController = DragController<RecordingTarget, ListenerHost>;

    fn controller(width: f32) -> (Rc<TestController>, RecordingTarget, ListenerHost) {
        let host = ListenerHost::default();
        let target = RecordingTarget::new(width);
        let controller = DragController::with_target(host.clone(), target.clone());
        (controller, target, host)
    }

    #[test]
    fn drag_scenario() {
        let (controller, target, host) = controller(40.0);

        controller.begin_drag();
        host.dispatch(&Mouse::at(100.0, 50.0));
        assert_eq!(target.position(), Some(Position { top: 40.0, left: 85.0 }));

        controller.end_drag();
        host.dispatch(&Mouse::at(200.0, 200.0));
        controller.on_move(&Mouse::at(200.0, 200.0));
        assert_eq!(target.position(), Some(Position { top: 40.0, left: 85.0 }));
        assert_eq!(target.writes(), 1);
    }

    #[test]
    fn position_uses_bias_constants() {
        let position = Position::under_pointer(cgmath::vec2(10.0, 0.0), 30.0);
        assert_eq!(position, Position { top: -10.0, left: 0.0 });
    }

    #[test]
    fn last_transition_wins() {
        let (controller, _, _) = controller(10.0);
        assert_eq!(controller.phase(), DragPhase::Idle);

        let calls = [true, true, false, true, false, false, true];
        for begin in calls {
            if begin {
                controller.begin_drag();
            } else {
                controller.end_drag();
            }
            assert_eq!(controller.is_dragging(), begin);
        }
        assert_eq!(controller.phase(), DragPhase::Dragging);
    }

    #[test]
    fn idle_moves_never_write() {
        let (controller, target, _) = controller(40.0);
        for (x, y) in [(0.0, 0.0), (-5.0, 12.5), (1e6, -1e6)] {
            controller.on_move(&Mouse::at(x, y));
        }
        assert_eq!(target.position(), None);
    }

    #[test]
    fn moves_are_always_suppressed() {
        let (controller, _, _) = controller(40.0);

        let idle = Mouse::at(1.0, 1.0);
        controller.on_move(&idle);
        assert!(idle.default_prevented());
        assert!(idle.propagation_stopped());

        controller.begin_drag();
        let dragging = Mouse::at(1.0, 1.0);
        controller.on_move(&dragging);
        assert!(dragging.default_prevented());
        assert!(dragging.propagation_stopped());
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let host = ListenerHost::default();
        let controller: Rc<TestController> = DragController::new(host.clone());
        controller.begin_drag();

        let event = Mouse::at(5.0, 5.0);
        host.dispatch(&event);
        assert!(event.default_prevented());
        assert!(controller.is_dragging());
    }

    #[test]
    fn repeated_begin_keeps_one_listener() {
        let (controller, _, host) = controller(40.0);
        for _ in 0..5 {
            controller.begin_drag();
            assert_eq!(host.active(), 1);
        }
        assert_eq!(host.installs(), 1);

        controller.end_drag();
        assert_eq!(host.active(), 0);
        assert!(!controller.has_listener());

        controller.begin_drag();
        assert_eq!(host.active(), 1);
        assert_eq!(host.installs(), 2);
    }

    #[test]
    fn listener_only_while_dragging() {
        let (controller, _, host) = controller(40.0);
        assert_eq!(host.active(), 0);
        controller.end_drag();
        assert_eq!(host.active(), 0);
        controller.begin_drag();
        assert!(controller.has_listener());
    }

    #[test]
    fn unmount_while_dragging_removes_listener() {
        let (controller, target, host) = controller(40.0);
        controller.begin_drag();
        controller.unmount();

        assert_eq!(host.active(), 0);
        assert!(!controller.is_dragging());
        host.dispatch(&Mouse::at(100.0, 50.0));
        assert_eq!(target.position(), None);
    }

    #[test]
    fn drop_while_dragging_removes_listener() {
        let (controller, target, host) = controller(40.0);
        controller.begin_drag();
        drop(controller);

        assert_eq!(host.active(), 0);
        host.dispatch(&Mouse::at(100.0, 50.0));
        assert_eq!(target.position(), None);
    }

    #[test]
    fn retarget_moves_new_element() {
        let (controller, old, host) = controller(40.0);
        let new = RecordingTarget::new(20.0);
        assert!(controller.attach(new.clone()).is_some());

        controller.begin_drag();
        host.dispatch(&Mouse::at(100.0, 50.0));
        assert_eq!(old.position(), None);
        assert_eq!(new.position(), Some(Position { top: 40.0, left: 95.0 }));
    }

    #[test]
    fn failed_subscribe_still_drags() {
        let host = ListenerHost::default();
        host.fail_next();
        let target = RecordingTarget::new(40.0);
        let controller = DragController::with_target(host.clone(), target.clone());

        controller.begin_drag();
        assert!(controller.is_dragging());
        assert!(!controller.has_listener());

        controller.on_move(&Mouse::at(100.0, 50.0));
        assert_eq!(target.position(), Some(Position { top: 40.0, left: 85.0 }));
    }
}
