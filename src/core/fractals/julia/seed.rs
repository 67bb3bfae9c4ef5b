use crate::core::data::complex::Complex;
use rand::Rng;

/// The constant `c` of the Julia map `z → z² + c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaSeed {
    pub real: f32,
    pub imag: f32,
}

impl JuliaSeed {
    #[must_use]
    pub fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    /// Draws the real part, then the imaginary part, each uniform in `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let real = rng.random_range(-1.0..1.0);
        let imag = rng.random_range(-1.0..1.0);

        Self { real, imag }
    }
}

impl From<JuliaSeed> for Complex {
    fn from(seed: JuliaSeed) -> Self {
        Complex {
            real: seed.real,
            imag: seed.imag,
        }
    }
}
