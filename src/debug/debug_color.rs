/// A RGBA color, each channel in `[0, 1]`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DebugColor {
    /// The red channel.
    pub r: f32,
    /// The green channel.
    pub g: f32,
    /// The blue channel.
    pub b: f32,
    /// The alpha channel.
    pub a: f32,
}

impl DebugColor {
    /// Opaque gray.
    pub const GRAY: DebugColor = DebugColor::new(0.5, 0.5, 0.5, 1.0);
    /// Opaque green.
    pub const GREEN: DebugColor = DebugColor::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: DebugColor = DebugColor::new(1.0, 1.0, 0.0, 1.0);

    /// Creates a new color from its four channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        DebugColor { r, g, b, a }
    }
}
