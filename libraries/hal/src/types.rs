/// Common data types for hardware abstraction interfaces
pub use nalgebra::Vector3;

/// 3D vector representation using nalgebra
pub type Vector3d = Vector3<f64>;

/// Three signed axis readings exactly as decoded from the sensor registers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Widen to floating point without any scaling
    pub fn to_vector(&self) -> Vector3d {
        Vector3d::new(self.x.into(), self.y.into(), self.z.into())
    }
}
