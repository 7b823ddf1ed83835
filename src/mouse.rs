use std::cell::Cell;

/// A pointer movement as seen by the drag controller.
pub trait PointerEvent {
    /// Pointer position in viewport (client) coordinates
    fn client_pos(&self) -> cgmath::Vector2<f32>;
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

/// A recorded pointer sample. Used off-browser, where there is no native event
/// to suppress, so the suppression calls are only remembered.
#[derive(Clone, Debug)]
pub struct Mouse {
    pub pos: cgmath::Vector2<f32>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl Mouse {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: (x, y).into(),
            ..Default::default()
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

impl Default for Mouse {
    fn default() -> Self {
        Self {
            pos: (0.0, 0.0).into(),
            default_prevented: Default::default(),
            propagation_stopped: Default::default(),
        }
    }
}

impl PointerEvent for Mouse {
    fn client_pos(&self) -> cgmath::Vector2<f32> {
        self.pos
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }
}

#[cfg(target_arch = "wasm32")]
impl PointerEvent for web_sys::MouseEvent {
    fn client_pos(&self) -> cgmath::Vector2<f32> {
        (self.client_x() as f32, self.client_y() as f32).into()
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn stop_propagation(&self) {
        web_sys::Event::stop_propagation(self);
    }
}
