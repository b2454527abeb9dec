use serde::{Deserialize, Serialize};

/// Packed `0xRRGGBB` color, matching how the content records store hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Unpack into linear RGBA components with the given alpha.
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b, alpha]
    }

    /// CSS-style hex string, used by the tech-stack legend.
    pub fn to_hex_string(self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

/// Canvas/viewport size in physical pixels.
///
/// Dimensions are clamped to at least 1 so aspect ratios and surface
/// configuration stay valid through window minimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Host-level reduced-motion accessibility preference.
///
/// Sampled once at each 3D section's mount. A later change of the host
/// setting does not affect an already-mounted section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_unpacks_channels() {
        let c = Color(0x9d4edd);
        let [r, g, b, a] = c.to_rgba(0.7);
        assert!((r - 0x9d as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0x4e as f32 / 255.0).abs() < 1e-6);
        assert!((b - 0xdd as f32 / 255.0).abs() < 1e-6);
        assert_eq!(a, 0.7);
    }

    #[test]
    fn color_hex_string() {
        assert_eq!(Color(0xc77dff).to_hex_string(), "#c77dff");
        assert_eq!(Color(0x00000f).to_hex_string(), "#00000f");
    }

    #[test]
    fn surface_size_never_zero() {
        let s = SurfaceSize::new(0, 0);
        assert_eq!(s.width(), 1);
        assert_eq!(s.height(), 1);
    }

    #[test]
    fn surface_aspect() {
        let s = SurfaceSize::new(1600, 900);
        assert!((s.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn motion_preference_default_is_full() {
        assert!(!MotionPreference::default().is_reduced());
        assert!(MotionPreference::Reduced.is_reduced());
    }
}
