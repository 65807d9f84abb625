use bitflags::bitflags;

bitflags! {
    /// Corners of the border that get rounded when the corner radius is positive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct CornerMask: u8 {
        const TOP_LEFT = 0b0001;
        const TOP_RIGHT = 0b0010;
        const BOTTOM_LEFT = 0b0100;
        const BOTTOM_RIGHT = 0b1000;
    }
}

impl Default for CornerMask {
    fn default() -> Self {
        Self::all()
    }
}

impl CornerMask {
    /// Returns true when `corner` is drawn rounded for the given radius
    #[must_use]
    pub fn is_rounded(&self, corner: CornerMask, radius: f32) -> bool {
        radius > 0.0 && self.contains(corner)
    }
}
