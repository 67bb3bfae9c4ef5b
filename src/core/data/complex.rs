use std::ops::Add;

// Single precision to keep the rendered art identical across hosts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f32,
    pub imag: f32,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f32 {
        self.real * self.real + self.imag * self.imag
    }

    /// `z²` evaluated as `(x² − y², 2xy)`.
    #[must_use]
    pub fn square(self) -> Self {
        Self::new(
            self.real * self.real - self.imag * self.imag,
            2.0 * self.real * self.imag,
        )
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}
