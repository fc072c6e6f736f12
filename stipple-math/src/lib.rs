mod color;
mod mat4;
mod rng;
mod scalar;

pub use color::Color;
pub use mat4::{Mat4, MatrixError, OrthoBounds};
pub use rng::Rng;
pub use scalar::{clamp, deg_to_rad, rad_to_deg, DEG_TO_RAD, RAD_TO_DEG};
