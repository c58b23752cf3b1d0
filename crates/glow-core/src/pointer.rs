use glam::Vec2;

/// Last known pointer position in surface-local logical coordinates.
///
/// The position survives a leave so a later move picks up cleanly; only
/// `active` decides whether the trail spawns.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl PointerState {
    /// Record a move given the event's client coordinates and the surface's
    /// bounding-box origin. Out-of-bounds positions are kept as-is.
    pub fn move_to(&mut self, client: Vec2, surface_origin: Vec2) {
        self.position = client - surface_origin;
        self.active = true;
    }

    pub fn leave(&mut self) {
        self.active = false;
    }

    /// Where a particle should spawn this tick, if anywhere.
    pub fn spawn_point(&self) -> Option<Vec2> {
        self.active.then_some(self.position)
    }
}
