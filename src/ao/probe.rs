use crate::math::Vec3;

/// Outcome of a single segment test against the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probe {
    Clear,
    /// `frac` is where along the segment (0..=1) the obstruction begins
    Solid { frac: f32 },
}

impl Probe {
    /// Contribution of this probe to the occlusion sum
    pub fn occlusion(&self) -> f32 {
        match *self {
            Probe::Clear => 0.0,
            Probe::Solid { frac } => frac,
        }
    }
}

/// Answers "is the segment from `start` to `end` blocked, and where".
///
/// Implementations must be synchronous and free of side effects; the sampler
/// may call them from any thread and in any order.
pub trait LineTest {
    fn test_line_frac(&self, start: Vec3, end: Vec3) -> Probe;
}

impl<F> LineTest for F
where
    F: Fn(Vec3, Vec3) -> Probe,
{
    fn test_line_frac(&self, start: Vec3, end: Vec3) -> Probe {
        self(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occlusion_contribution() {
        assert_eq!(Probe::Clear.occlusion(), 0.0);
        assert_eq!(Probe::Solid { frac: 0.25 }.occlusion(), 0.25);
    }

    #[test]
    fn test_closure_is_line_test() {
        let floor = |start: Vec3, end: Vec3| {
            if end[2] < 0.0 {
                Probe::Solid { frac: start[2] / (start[2] - end[2]) }
            } else {
                Probe::Clear
            }
        };
        assert_eq!(floor.test_line_frac([0.0, 0.0, 1.0], [0.0, 0.0, 2.0]), Probe::Clear);
        assert_eq!(floor.test_line_frac([0.0, 0.0, 1.0], [0.0, 0.0, -1.0]), Probe::Solid { frac: 0.5 });
    }
}
