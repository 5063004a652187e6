/// A pair of fixed endpoints and a movable proportion between them.
///
/// `value_a` and `value_b` are decided at construction; only `input` (the
/// proportion in \[0, 1\]) changes at run time. An input of 0 yields `value_a`,
/// 1 yields `value_b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearParameter {
    value_a: f32,
    value_b: f32,
    input: f32,
}

impl LinearParameter {
    /// `initial_input` is stored as given and must already lie in \[0, 1\].
    /// Only [`set_input`](Self::set_input) clamps.
    pub fn new(value_a: f32, value_b: f32, initial_input: f32) -> Self {
        Self {
            value_a,
            value_b,
            input: initial_input,
        }
    }

    /// Out-of-range values are clamped, never rejected.
    pub fn set_input(&mut self, input: f32) {
        self.input = input.clamp(0.0, 1.0);
    }

    pub fn input(&self) -> f32 {
        self.input
    }
    pub fn value_a(&self) -> f32 {
        self.value_a
    }
    pub fn value_b(&self) -> f32 {
        self.value_b
    }

    #[inline]
    pub fn output(&self) -> f32 {
        (1.0 - self.input) * self.value_a + self.input * self.value_b
    }
}
