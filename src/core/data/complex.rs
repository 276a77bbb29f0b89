use std::ops::Add;

/// A point in fractal-space, also used as the iterate `z` of the escape-time loop.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// `z²`, written as `x² - y²` and `xy + xy` so it rounds the same way as
    /// the shader's loop.
    #[must_use]
    pub fn square(self) -> Self {
        Self {
            real: (self.real * self.real) - (self.imag * self.imag),
            imag: (self.real * self.imag) + (self.real * self.imag),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}
