//! Unit types: Dp, Density, and conversions

/// Pixel value reported for an infinite [`Dp`] once rounded.
///
/// Matches the unbounded sentinel used by layout constraints.
pub const INFINITE_PX: i32 = i32::MAX;

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub const INFINITY: Dp = Dp(f32::INFINITY);

    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

/// Screen density used to convert [`Dp`] values into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    /// Pixels per dp.
    pub density: f32,
    /// Additional scale applied to text sizes.
    pub font_scale: f32,
}

impl Density {
    pub const fn new(density: f32) -> Self {
        Self {
            density,
            font_scale: 1.0,
        }
    }

    pub const fn with_font_scale(density: f32, font_scale: f32) -> Self {
        Self {
            density,
            font_scale,
        }
    }

    /// Converts `dp` to fractional pixels.
    pub fn to_px(&self, dp: Dp) -> f32 {
        dp.to_px(self.density)
    }

    /// Converts `dp` to whole pixels, rounding half away from zero.
    ///
    /// An infinite value maps to [`INFINITE_PX`] instead of saturating
    /// through a float cast.
    pub fn round_to_px(&self, dp: Dp) -> i32 {
        let px = self.to_px(dp);
        if px.is_infinite() {
            INFINITE_PX
        } else {
            px.round() as i32
        }
    }

    pub fn to_dp(&self, px: i32) -> Dp {
        Dp::from_px(px as f32, self.density)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
#[path = "tests/unit_tests.rs"]
mod tests;
