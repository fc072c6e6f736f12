use crate::Rng;

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    pub const RED: Self = Self { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Self = Self { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Self = Self { r: 0, g: 0, b: 255, a: 255 };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Random RGB channels with opaque alpha.
    pub fn random(rng: &mut Rng) -> Self {
        // packed rgba with the alpha byte forced opaque
        let rgba = rng.next_u32() | 0xFF;

        Self {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
            a: rgba as u8,
        }
    }

    /// Channels normalized to `[0.0, 1.0]`, in `uniform4fv` upload order.
    pub fn as_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_color_is_opaque() {
        let mut rng = Rng::new(5);

        for _ in 0..100 {
            assert_eq!(Color::random(&mut rng).a, 255);
        }
    }

    #[test]
    fn test_random_color_reproducible_under_fixed_seed() {
        let mut a = Rng::new(1234);
        let mut b = Rng::new(1234);

        assert_eq!(Color::random(&mut a), Color::random(&mut b));
    }

    #[test]
    fn test_as_f32_normalizes_channels() {
        let color = Color::new(255, 0, 51, 255);
        assert_eq!(color.as_f32(), [1.0, 0.0, 0.2, 1.0]);
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
    }
}
