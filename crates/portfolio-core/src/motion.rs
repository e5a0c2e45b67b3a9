use glam::{EulerRot, Mat4, Quat, Vec2};

/// Constant-rate rotation about X and Y, accumulated over time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    /// Accumulated angles in radians (x, y).
    pub angle: Vec2,
    /// Radians per second (x, y).
    pub rate: Vec2,
}

impl Spin {
    pub fn new(rate: [f32; 2]) -> Self {
        Self {
            angle: Vec2::ZERO,
            rate: Vec2::from_array(rate),
        }
    }

    pub fn advance(&mut self, dt_sec: f32) {
        self.angle += self.rate * dt_sec.max(0.0);
        // wrap to one turn
        self.angle.x %= std::f32::consts::TAU;
        self.angle.y %= std::f32::consts::TAU;
    }

    /// Euler angles in XYZ order.
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.angle.x, self.angle.y, 0.0)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_quat(self.quat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_at_rate() {
        let mut s = Spin::new([0.12, 0.30]);
        s.advance(2.0);
        assert!((s.angle - Vec2::new(0.24, 0.60)).length() < 1e-6);
        s.advance(-1.0);
        assert!((s.angle - Vec2::new(0.24, 0.60)).length() < 1e-6);
    }
}
