#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    pub is_dragging: bool,
}

impl DragState {
    pub fn phase(&self) -> DragPhase {
        if self.is_dragging {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }
}
