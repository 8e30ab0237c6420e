use std::ops::{Index, IndexMut, Mul};

use crate::{approx::ApproxEq, traits::Number, Mat4, Vector};

impl<T> Index<(usize, usize)> for Mat4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat4<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U> PartialEq<Mat4<U>> for Mat4<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Mat4<U>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T> Eq for Mat4<T> where T: Eq {}

impl<T> ApproxEq for Mat4<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }
}

/// Matrix * Column Vector, using only the top-left `N`×`N` submatrix.
///
/// This lets a 4x4 transform apply to shorter vectors by ignoring the unused rows and columns:
/// multiplying a [`Vec3`][crate::Vec3] applies only the linear (rotation/scale) part of the
/// transform. Whether that truncation is semantically correct is the caller's responsibility;
/// points that should honor translation and perspective go through
/// [`Mat4::transform_point`] instead.
impl<T, const N: usize> Mul<Vector<T, N>> for Mat4<T>
where
    T: Number,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        const { assert!(N <= 4, "a 4x4 matrix cannot multiply a vector longer than 4") }

        Vector::from_fn(|row| (0..N).fold(T::ZERO, |acc, col| acc + self.0[row][col] * rhs[col]))
    }
}

/// Matrix * Matrix, following the column-vector convention.
///
/// Neither operand is mutated. `(m2 * m1) * v` equals `m2 * (m1 * v)`: the right-hand transform
/// applies first.
impl<T> Mul<Mat4<T>> for Mat4<T>
where
    T: Number,
{
    type Output = Mat4<T>;

    fn mul(self, rhs: Mat4<T>) -> Self::Output {
        Mat4::from_fn(|i, j| (0..4).fold(T::ZERO, |acc, k| acc + self.0[i][k] * rhs.0[k][j]))
    }
}
