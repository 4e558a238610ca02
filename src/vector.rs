use ultraviolet::DVec2;

/// Double precision 2D vector used for positions (m), velocities (m/s),
/// accelerations (m/s²) and forces (N).
pub type Vec2 = DVec2;

/// Polar view of a 2D vector.
pub trait Polar {
    /// Builds a vector of the given `length` pointing at `angle` radians from +x.
    fn from_polar(length: f64, angle: f64) -> Self;

    /// Overwrites both components from polar form.
    fn set_polar(&mut self, length: f64, angle: f64);

    /// Euclidean length.
    fn length(&self) -> f64;

    /// Angle from +x in radians, in `(-π, π]`.
    fn angle(&self) -> f64;
}

impl Polar for Vec2 {
    #[inline]
    fn from_polar(length: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(length * cos, length * sin)
    }

    #[inline]
    fn set_polar(&mut self, length: f64, angle: f64) {
        *self = Self::from_polar(length, angle);
    }

    #[inline]
    fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}
