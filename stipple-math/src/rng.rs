/// Linear congruential random number generator.
///
/// A fixed seed reproduces the exact sequence; [`Default`] seeds from the
/// wall clock, on both wasm and native targets.
#[derive(Clone, Copy, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    const A: u32 = 1664525;
    const C: u32 = 1013904223;

    pub fn new(seed: u32) -> Self {
        Rng { state: seed }
    }

    /// Advances the generator and returns the next 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(Self::A).wrapping_add(Self::C);
        self.state
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        // the top 24 bits fit an f32 mantissa exactly, keeping 1.0 unreachable
        (self.next_u32() >> 8) as f32 / (1 << 24) as f32
    }

    /// Uniform float in `[min, max)`.
    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        self.next_f32() * (max - min) + min
    }
}

impl Default for Rng {
    fn default() -> Self {
        let seed = web_time::SystemTime::now()
            .duration_since(web_time::SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos();

        Rng::new(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_reproduces_sequence() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);

        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Rng::new(1);
        let mut b = Rng::new(2);

        // the LCG step is injective in the state, so distinct seeds cannot
        // collide on the first draw
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_f32_stays_below_one() {
        let mut rng = Rng::new(0xDEAD_BEEF);

        for _ in 0..1000 {
            let value = rng.next_f32();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_gen_range_bounds() {
        let mut rng = Rng::new(99);

        for _ in 0..1000 {
            let value = rng.gen_range(-3.0, 7.0);
            assert!((-3.0..7.0).contains(&value));
        }
    }
}
