//! Seams to the sensor feed and to whatever moves the cursor.

use glam::{Quat, Vec3};

use crate::mover::MouseMover;

/// One sample from the armband.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SensorEvent {
    /// Unit quaternion, device to world.
    Orientation(Quat),
    /// Angular velocity in deg/s, device frame.
    Gyroscope(Vec3),
}

pub trait MotionListener {
    fn on_orientation(&mut self, orientation: Quat);
    fn on_gyroscope(&mut self, gyro_deg: Vec3);
}

impl MotionListener for MouseMover {
    fn on_orientation(&mut self, orientation: Quat) {
        MouseMover::on_orientation(self, orientation);
    }
    fn on_gyroscope(&mut self, gyro_deg: Vec3) {
        MouseMover::on_gyroscope(self, gyro_deg);
    }
}

#[inline]
pub fn dispatch<L: MotionListener + ?Sized>(listener: &mut L, event: SensorEvent) {
    match event {
        SensorEvent::Orientation(q) => listener.on_orientation(q),
        SensorEvent::Gyroscope(g) => listener.on_gyroscope(g),
    }
}

/// Receives relative cursor motion in whole pixels.
pub trait CursorSink {
    fn move_by(&mut self, dx: i32, dy: i32);
}

/// Drives a [`MouseMover`] from sensor events and forwards every non-zero
/// delta to a [`CursorSink`].
pub struct PointerSession<S: CursorSink> {
    mover: MouseMover,
    sink: S,
    enabled: bool,
}

impl<S: CursorSink> PointerSession<S> {
    pub fn new(mover: MouseMover, sink: S) -> Self {
        Self {
            mover,
            sink,
            enabled: true,
        }
    }

    pub fn handle(&mut self, event: SensorEvent) {
        match event {
            SensorEvent::Orientation(q) => self.mover.on_orientation(q),
            SensorEvent::Gyroscope(g) => {
                if !self.enabled {
                    return;
                }
                self.mover.on_gyroscope(g);
                let d = self.mover.delta();
                // NaN casts to 0 and is dropped here
                let (dx, dy) = (d.x as i32, d.y as i32);
                if dx != 0 || dy != 0 {
                    log::trace!("[session] move ({}, {})", dx, dy);
                    self.sink.move_by(dx, dy);
                }
            }
        }
    }

    /// While disabled, gyroscope samples are dropped but the pose keeps
    /// tracking. Re-enabling clears the carry from before the pause.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && !self.enabled {
            self.mover.clear_motion();
        }
        if enabled != self.enabled {
            log::debug!("[session] enabled={}", enabled);
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mover(&self) -> &MouseMover {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut MouseMover {
        &mut self.mover
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (MouseMover, S) {
        (self.mover, self.sink)
    }
}

impl<S: CursorSink> MotionListener for PointerSession<S> {
    fn on_orientation(&mut self, orientation: Quat) {
        self.handle(SensorEvent::Orientation(orientation));
    }
    fn on_gyroscope(&mut self, gyro_deg: Vec3) {
        self.handle(SensorEvent::Gyroscope(gyro_deg));
    }
}
