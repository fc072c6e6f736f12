//! Column-major 4x4 transform matrix.
//!
//! Matrices are stored as a flat `[f32; 16]` where cell `(row, col)` lives at
//! flat index `4 * col + row`, matching the layout a `mat4` uniform expects.

/// Error raised when a slice cannot supply a full matrix.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// The source slice holds fewer than the 16 values a matrix requires.
    #[error("matrix source has {0} elements, expected at least 16")]
    InvalidDimension(usize),
}

/// Box mapped onto the clip cube by [`Mat4::orthographic`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

/// Column-major 4x4 transform matrix.
///
/// Constructors allocate a fresh matrix; the `set_*` counterparts overwrite a
/// caller-owned one without reallocating, returning `&mut Self` for chaining.
/// [`as_slice`](Self::as_slice) yields the flat buffer in the exact order a
/// `uniform_matrix4fv` upload consumes (`transpose = false`).
#[derive(Debug, Clone, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    #[rustfmt::skip]
    const IDENTITY: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ];

    /// Flat index of cell `(row, col)` in the column-major buffer.
    pub const fn index(row: usize, col: usize) -> usize {
        4 * col + row
    }

    /// Creates an identity matrix.
    pub fn identity() -> Self {
        Self { data: Self::IDENTITY }
    }

    /// Overwrites `self` with the identity matrix.
    pub fn set_identity(&mut self) -> &mut Self {
        self.data = Self::IDENTITY;
        self
    }

    /// Creates a matrix from the first 16 values of `source`.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] when `source` holds fewer
    /// than 16 values.
    pub fn from_slice(source: &[f32]) -> Result<Self, MatrixError> {
        if source.len() < 16 {
            return Err(MatrixError::InvalidDimension(source.len()));
        }

        let mut data = [0.0; 16];
        data.copy_from_slice(&source[..16]);
        Ok(Self { data })
    }

    /// Overwrites `self` with the first 16 values of `source`.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] when `source` holds fewer
    /// than 16 values.
    pub fn copy_from(&mut self, source: &[f32]) -> Result<&mut Self, MatrixError> {
        if source.len() < 16 {
            return Err(MatrixError::InvalidDimension(source.len()));
        }

        self.data.copy_from_slice(&source[..16]);
        Ok(self)
    }

    /// Returns the product `self * prev`: the transform that applies `prev`
    /// first and `self` second when acting on column vectors.
    pub fn multiply(&self, prev: &Mat4) -> Mat4 {
        let mut product = Mat4::identity();
        product.set_product(self, prev);
        product
    }

    /// Overwrites `self` with the product `next * prev`.
    ///
    /// The borrow rules keep the destination distinct from both operands, so
    /// the product can be written cell by cell without a scratch copy.
    pub fn set_product(&mut self, next: &Mat4, prev: &Mat4) -> &mut Self {
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += next.data[Self::index(row, k)] * prev.data[Self::index(k, col)];
                }
                self.data[Self::index(row, col)] = sum;
            }
        }
        self
    }

    /// Creates a right-handed rotation about the x axis, `angle` in radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();

        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0,   c,   s, 0.0, // col 1
                0.0,  -s,   c, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Creates a right-handed rotation about the y axis, `angle` in radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();

        Self {
            data: [
                  c, 0.0,  -s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                  s, 0.0,   c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a right-handed rotation about the z axis, `angle` in radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();

        Self {
            data: [
                  c,   s, 0.0, 0.0,
                 -s,   c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Overwrites `self` with a rotation about the x axis.
    pub fn set_rotation_x(&mut self, angle: f32) -> &mut Self {
        self.data = Self::rotation_x(angle).data;
        self
    }

    /// Overwrites `self` with a rotation about the y axis.
    pub fn set_rotation_y(&mut self, angle: f32) -> &mut Self {
        self.data = Self::rotation_y(angle).data;
        self
    }

    /// Overwrites `self` with a rotation about the z axis.
    pub fn set_rotation_z(&mut self, angle: f32) -> &mut Self {
        self.data = Self::rotation_z(angle).data;
        self
    }

    /// Creates an orthographic projection mapping `bounds` onto the clip
    /// cube, with the z axis negated per the GL convention.
    ///
    /// Degenerate bounds (`left == right`, `bottom == top` or `near == far`)
    /// divide by zero and produce non-finite cells; no validation is
    /// performed.
    pub fn orthographic(bounds: OrthoBounds) -> Self {
        let OrthoBounds { left, right, bottom, top, near, far } = bounds;

        let mut result = Self::identity();
        let data = &mut result.data;

        data[0] = 2.0 / (right - left);
        data[5] = 2.0 / (top - bottom);
        data[10] = -2.0 / (far - near);

        data[12] = -(right + left) / (right - left);
        data[13] = -(top + bottom) / (top - bottom);
        data[14] = -(far + near) / (far - near);

        result
    }

    /// Overwrites `self` with an orthographic projection of `bounds`.
    pub fn set_orthographic(&mut self, bounds: OrthoBounds) -> &mut Self {
        self.data = Self::orthographic(bounds).data;
        self
    }

    /// Pixel-space projection for a `width` x `height` canvas: x grows right,
    /// y grows down, matching canvas mouse coordinates.
    pub fn orthographic_from_size(width: f32, height: f32) -> Self {
        Self::orthographic(OrthoBounds {
            left: 0.0,
            right: width,
            bottom: height,
            top: 0.0,
            near: -1.0,
            far: 1.0,
        })
    }

    /// The flat column-major buffer, ready for a uniform upload.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Self { data }
    }
}
