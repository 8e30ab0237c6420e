use std::{array, fmt};

use crate::traits::{Number, One, Trig, Zero};
use crate::{Vec3, Vector};

mod ops;

/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A 4x4 homogeneous transform matrix, stored row-major and addressed `m[(row, col)]`.
///
/// 4x4 is the only supported size; it is a fixed design constraint of this library (enough for
/// homogeneous transforms of 3D geometry), not a general n×n facility, and the type makes the
/// constraint structural.
///
/// # Construction
///
/// - [`Mat4::IDENTITY`] is the multiplicative identity, and also what the [`Default`] impl
///   returns: a freshly constructed matrix leaves vectors unchanged.
/// - [`Mat4::from_rows`] and [`Mat4::from_columns`] fill a matrix with raw elements.
/// - [`Mat4::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Mat4::rotation`] and [`Mat4::rotation_cos_sin`] build planar rotations.
/// - [`Mat4::translation`] builds a pure translation.
///
/// # Composition
///
/// This library uses the *column-vector convention*: a transform is applied by left-multiplying
/// a column vector, and `(m2 * m1) * v` equals `m2 * (m1 * v)`. Composed transforms therefore
/// apply right-to-left: in `m3 * m2 * m1`, `m1` acts first.
///
/// # Element Access
///
/// [`Index`] and [`IndexMut`] are implemented for `(usize, usize)` tuples; the first element of
/// the tuple is the *row*, the second the *column*, both 0-based. Indexing out of bounds panics,
/// just like it does for slices; [`Mat4::get`] and [`Mat4::get_mut`] return [`Option`]s instead.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Mat4<T>([[T; 4]; 4]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4<T> {}

impl<T: Zero + Copy> Mat4<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; 4]; 4]);
}

impl<T: Zero + One + Copy> Mat4<T> {
    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with this matrix returns it unchanged.
    pub const IDENTITY: Self = {
        let mut m = Self::ZERO;
        m.0[0][0] = T::ONE;
        m.0[1][1] = T::ONE;
        m.0[2][2] = T::ONE;
        m.0[3][3] = T::ONE;
        m
    };
}

impl<T> Mat4<T> {
    /// Creates a [`Mat4`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let m = Mat4::from_rows([
    ///     [1, 0, 0, 7],
    ///     [0, 1, 0, 0],
    ///     [0, 0, 1, 0],
    ///     [0, 0, 0, 1],
    /// ]);
    /// assert_eq!(m[(0, 3)], 7);
    /// ```
    pub fn from_rows<U: Into<Vector<T, 4>>>(rows: [U; 4]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Mat4`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let rows = Mat4::from_rows([
    ///     [0, 1, 2, 3],
    ///     [4, 5, 6, 7],
    ///     [8, 9, 10, 11],
    ///     [12, 13, 14, 15],
    /// ]);
    /// let columns = Mat4::from_columns([
    ///     [0, 4, 8, 12],
    ///     [1, 5, 9, 13],
    ///     [2, 6, 10, 14],
    ///     [3, 7, 11, 15],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<U: Into<Vector<T, 4>>>(columns: [U; 4]) -> Self
    where
        T: Copy,
    {
        Self::from_rows(columns).transpose()
    }

    /// Creates a [`Mat4`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// This mirrors [`array::from_fn`].
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Mat4<U>
    where
        F: FnMut(T) -> U,
    {
        Mat4(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }
}

impl<T: Number> Mat4<T> {
    /// Builds a rotation by `radians` in the plane spanned by axes `i` and `j`.
    ///
    /// The result is the identity matrix with the 2x2 block at rows/columns `{i, j}` overwritten
    /// by a standard 2D rotation. Picking the plane generalizes the usual "rotate about axis X"
    /// constructors: `rotation(0, 1, a)` rotates in the XY plane (about Z in 3D), `rotation(1, 2,
    /// a)` in the YZ plane (about X), and so on.
    ///
    /// The axes must be distinct and in `[0, 4)`; anything else is a caller contract violation
    /// (`i == j` would corrupt the diagonal) and panics in debug builds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let quarter = Mat4f::rotation(0, 1, FRAC_PI_2);
    /// assert_approx_eq!(quarter * Vec4f::X, Vec4f::Y);
    /// ```
    pub fn rotation(i: usize, j: usize, radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_cos_sin(i, j, radians.cos(), radians.sin())
    }

    /// Builds a rotation in the plane spanned by axes `i` and `j` from a precomputed cosine and
    /// sine.
    ///
    /// [`Mat4::rotation`] is defined in terms of this; use it directly when the same angle is
    /// reused or when the cosine and sine are known analytically, to avoid redundant trig calls.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// // A quarter turn in the XY plane, no trig calls needed.
    /// let quarter = Mat4f::rotation_cos_sin(0, 1, 0.0, 1.0);
    /// assert_eq!(quarter * Vec4f::X, Vec4f::Y);
    /// ```
    pub fn rotation_cos_sin(i: usize, j: usize, cos: T, sin: T) -> Self {
        debug_assert!(
            i != j && i < 4 && j < 4,
            "rotation plane axes must be distinct and in [0, 4) (got {i}, {j})"
        );
        let mut m = Self::IDENTITY;
        m.0[i][i] = cos;
        m.0[i][j] = -sin;
        m.0[j][i] = sin;
        m.0[j][j] = cos;
        m
    }

    /// Builds a pure translation by `offset`.
    ///
    /// Translations are not linear maps, so applying one requires the homogeneous form: use
    /// [`Mat4::transform_point`], or multiply with a [`Vec4`][crate::Vec4] whose w-component
    /// is 1.
    pub fn translation(offset: Vec3<T>) -> Self {
        let mut m = Self::IDENTITY;
        m.0[0][3] = offset[0];
        m.0[1][3] = offset[1];
        m.0[2][3] = offset[2];
        m
    }

    /// Transforms `point` as a point in homogeneous coordinates, including the perspective
    /// divide.
    ///
    /// The point is implicitly extended with a trailing w = 1, multiplied with the full
    /// (N+1)×(N+1) top-left submatrix, and the resulting w is stripped again. If w is neither 0
    /// nor 1, the remaining elements are scaled by `1/w` (the perspective divide). w == 1 is the
    /// affine case (rotations, translations) and needs no scaling; w == 0 is a point at infinity
    /// and is deliberately passed through unscaled instead of producing infinities.
    ///
    /// In contrast, the [`Mul`][std::ops::Mul] operator applies only the top-left N×N submatrix
    /// and therefore cannot translate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let m = Mat4f::translation(vec3(10.0, 20.0, 30.0));
    /// assert_eq!(m.transform_point(vec3(1.0, 2.0, 3.0)), vec3(11.0, 22.0, 33.0));
    ///
    /// // The plain operator ignores the translation column:
    /// assert_eq!(m * vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn transform_point<const N: usize>(&self, point: Vector<T, N>) -> Vector<T, N> {
        const { assert!(N < 4, "homogeneous transform needs a spare dimension for w") }

        // Column N carries the contribution of the implicit w = 1.
        let out = Vector::from_fn(|i| {
            (0..N).fold(self.0[i][N], |acc, j| acc + self.0[i][j] * point[j])
        });
        let w = (0..N).fold(self.0[N][N], |acc, j| acc + self.0[N][j] * point[j]);
        if w != T::ZERO && w != T::ONE {
            out * (T::ONE / w)
        } else {
            out
        }
    }
}

impl<T: Zero + One + Copy> Default for Mat4<T> {
    /// Returns [`Mat4::IDENTITY`].
    ///
    /// Note that this diverges from the usual "all elements defaulted" behavior: a default
    /// transform is the one that leaves geometry alone.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug> fmt::Debug for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, vec2, vec3, vec4, Vec4f};

    use super::*;

    fn random_mat() -> Mat4f {
        Mat4::from_fn(|_, _| fastrand::f32() * 2.0 - 1.0)
    }

    #[test]
    fn identity_laws() {
        fastrand::seed(4);
        let m = random_mat();
        assert_eq!(Mat4f::IDENTITY * m, m);
        assert_eq!(m * Mat4f::IDENTITY, m);
        assert_eq!(Mat4f::default(), Mat4f::IDENTITY);
    }

    #[test]
    fn identity_preserves_vectors() {
        let id = Mat4f::IDENTITY;
        assert_eq!(id * vec2(1.0, 2.0), vec2(1.0, 2.0));
        assert_eq!(id * vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0));
        assert_eq!(id * vec4(1.0, 2.0, 3.0, 4.0), vec4(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn associativity() {
        fastrand::seed(7);
        for _ in 0..16 {
            let (a, b, c) = (random_mat(), random_mat(), random_mat());
            assert_approx_eq!((a * b) * c, a * (b * c)).abs(1e-4);
        }
    }

    #[test]
    fn composition_is_right_to_left() {
        // First translate, then rotate a quarter turn in XY.
        let rotate = Mat4f::rotation(0, 1, FRAC_PI_2);
        let translate = Mat4f::translation(vec3(1.0, 0.0, 0.0));
        let composed = rotate * translate;

        let p = vec3(0.0, 0.0, 0.0);
        let expected = rotate.transform_point(translate.transform_point(p));
        assert_approx_eq!(composed.transform_point(p), expected);
        assert_approx_eq!(composed.transform_point(p), vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn truncated_multiply_uses_submatrix() {
        // Fill the parts outside the top-left 3x3 with garbage; a Vec3 multiply must not see it.
        let mut m = Mat4f::IDENTITY;
        m[(0, 3)] = 100.0;
        m[(3, 0)] = 100.0;
        m[(3, 3)] = 100.0;
        assert_eq!(m * vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn mat_mat_mul() {
        let a = Mat4::from_fn(|i, j| (i * 4 + j) as i32);
        let b = Mat4::from_fn(|i, j| (i as i32) - (j as i32));
        let c = a * b;
        for i in 0..4 {
            for j in 0..4 {
                let expected = (0..4).map(|k| a[(i, k)] * b[(k, j)]).sum::<i32>();
                assert_eq!(c[(i, j)], expected);
            }
        }
    }

    #[test]
    fn rotation_block() {
        let a = 0.3f32;
        let m = Mat4f::rotation(0, 1, a);
        assert_eq!(m[(0, 0)], a.cos());
        assert_eq!(m[(0, 1)], -a.sin());
        assert_eq!(m[(1, 0)], a.sin());
        assert_eq!(m[(1, 1)], a.cos());
        // The rest is untouched identity.
        assert_eq!(m[(2, 2)], 1.0);
        assert_eq!(m[(3, 3)], 1.0);
        assert_eq!(m[(2, 0)], 0.0);

        // The 2x2 block has determinant 1 (rotations preserve area).
        let det = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
        assert_approx_eq!(det, 1.0);
    }

    #[test]
    fn rotation_inverse() {
        let a = 1.234f32;
        assert_approx_eq!(
            Mat4f::rotation(0, 1, a) * Mat4f::rotation(0, 1, -a),
            Mat4f::IDENTITY
        )
        .abs(1e-6);
        assert_approx_eq!(
            Mat4f::rotation(1, 3, a) * Mat4f::rotation(1, 3, -a),
            Mat4f::IDENTITY
        )
        .abs(1e-6);
    }

    #[test]
    fn rotation_quarter_turn() {
        let m = Mat4f::rotation(0, 1, FRAC_PI_2);
        assert_approx_eq!(m * Vec4f::X, Vec4f::Y).abs(1e-6);
    }

    #[test]
    fn translation_is_exact() {
        let m = Mat4f::translation(vec3(0.25, -8.0, 16.5));
        // Affine case: w stays exactly 1, no divide, so the result is exact.
        assert_eq!(
            m.transform_point(vec3(1.0, 2.0, 3.0)),
            vec3(1.25, -6.0, 19.5)
        );
    }

    #[test]
    fn perspective_divide() {
        // w ends up as 2, so the result is scaled by 1/2.
        let mut m = Mat4f::IDENTITY;
        m[(3, 3)] = 2.0;
        assert_eq!(
            m.transform_point(vec3(2.0, 4.0, 6.0)),
            vec3(1.0, 2.0, 3.0)
        );

        // w == 0 (point at infinity) passes through unscaled rather than producing infinities.
        m[(3, 3)] = 0.0;
        assert_eq!(
            m.transform_point(vec3(2.0, 4.0, 6.0)),
            vec3(2.0, 4.0, 6.0)
        );
    }

    #[test]
    fn transform_point_2d() {
        // A 2D point uses the top-left 3x3 homogeneous form; rows/columns past index 2 are
        // ignored.
        let mut m = Mat4f::IDENTITY;
        m[(0, 2)] = 5.0; // translation in homogeneous 2D
        m[(1, 2)] = -1.0;
        m[(0, 3)] = 1000.0;
        assert_eq!(m.transform_point(vec2(1.0, 2.0)), vec2(6.0, 1.0));
    }

    #[test]
    #[should_panic]
    fn rotation_axes_must_differ() {
        Mat4f::rotation(2, 2, 1.0);
    }

    #[test]
    fn fmt() {
        let m = Mat4::from_fn(|i, j| (i * 4 + j) as i32);
        assert_eq!(
            format!("{m:?}"),
            "[[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]"
        );
    }
}
