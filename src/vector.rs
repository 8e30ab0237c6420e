use std::{array, fmt};

use crate::traits::{Number, One, Sqrt, Zero};

mod ops;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::ZERO`] is the all-zeroes vector, and also what the [`Default`] impl returns.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   can be used to obtain unit vectors pointing in the given direction.
///
/// # Copying
///
/// A [`Vector`] is a plain value: it derives [`Copy`] and [`Clone`], and a copy has its own
/// storage. Mutating a copy never affects the vector it was copied from.
///
/// # Mutation vs. fresh values
///
/// Operations come in two families, and the distinction is structural rather than a naming
/// convention:
///
/// - *Value-returning* operations ([`Add`], [`Sub`], [`Mul<T>`], [`Neg`], [`Vector::dot`],
///   [`Vector::length`], ...) take their operands by value and return a fresh result.
/// - *Mutating* operations go through the assignment operators ([`AddAssign`], [`SubAssign`],
///   [`MulAssign<T>`]) and require `&mut` access to the receiver.
///
/// Accumulation loops (summing forces, velocities, ...) should use the assignment operators;
/// everything else composes the value-returning family.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::at`] additionally accepts negative indices, which address elements from the end.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements, as do the [`AsRef`] and [`AsMut`] impls.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation
///   when the element type `T` also allows this.
///
/// Operand arity is part of the type, so element-wise operations on vectors of different lengths
/// are compile errors rather than runtime contract violations.
///
/// [`Add`]: std::ops::Add
/// [`Sub`]: std::ops::Sub
/// [`Mul<T>`]: std::ops::Mul
/// [`Neg`]: std::ops::Neg
/// [`AddAssign`]: std::ops::AddAssign
/// [`SubAssign`]: std::ops::SubAssign
/// [`MulAssign<T>`]: std::ops::MulAssign
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Returns the element at `index`, which may be negative to address elements from the end
    /// (index -1 is the last element).
    ///
    /// A negative index is adjusted by adding the vector's length, exactly once: `at(-1)` on a
    /// 3-element vector reads element 2, but `at(-4)` does *not* wrap around again. Indices whose
    /// effective value falls outside `[0, N)` are a caller contract violation and panic.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(v.at(0), 1);
    /// assert_eq!(v.at(-1), 3);
    /// assert_eq!(v.at(-3), 1);
    /// ```
    ///
    /// ```should_panic
    /// # use homalg::*;
    /// vec3(1, 2, 3).at(-4); // below -N: out of range, no double wrap
    /// ```
    pub fn at(&self, index: isize) -> T
    where
        T: Copy,
    {
        let effective = if index < 0 { index + N as isize } else { index };
        debug_assert!(
            (0..N as isize).contains(&effective),
            "index {index} out of range for vector of length {N}"
        );
        self.0[effective as usize]
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often
    /// shorter and requires no type annotation.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The dot product is commutative: `a.dot(b) == b.dot(a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3(4, 5, 6);
    /// assert_eq!(a.dot(b), 32);
    /// assert_eq!(b.dot(a), 32);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i] * other.0[i])
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// The result is never negative, and is zero only for the zero vector (floating-point edge
    /// cases aside).
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use homalg::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T: Zero, const N: usize> Default for Vector<T, N> {
    /// Returns [`Vector::ZERO`].
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_are_independent() {
        let v = vec3(1, 2, 3);
        let mut copy = v;
        copy += vec3(10, 10, 10);
        assert_eq!(copy, vec3(11, 12, 13));
        assert_eq!(v, vec3(1, 2, 3));
    }

    #[test]
    fn negative_indexing() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.at(0), 1);
        assert_eq!(v.at(3), 4);
        assert_eq!(v.at(-1), v.at(3));
        assert_eq!(v.at(-4), v.at(0));
    }

    #[test]
    #[should_panic]
    fn index_past_end() {
        vec3(1, 2, 3).at(3);
    }

    #[test]
    #[should_panic]
    fn index_below_negative_length() {
        // -4 wraps once to -1, which is still out of range; it must not wrap a second time.
        vec3(1, 2, 3).at(-4);
    }

    #[test]
    fn mutating_family() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v += vec3(4.0, 5.0, 6.0);
        assert_eq!(v, vec3(5.0, 7.0, 9.0));
        v -= vec3(4.0, 5.0, 6.0);
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
        v *= 2.0;
        assert_eq!(v, vec3(2.0, 4.0, 6.0));
    }

    #[test]
    fn dot() {
        let v0 = vec3(1, 2, 3);
        let v1 = vec3(4, 5, 6);
        assert_eq!(v0.dot(v1), 32);
        assert_eq!(v1.dot(v0), v0.dot(v1));

        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec2f::ZERO.length(), 0.0);
        assert_eq!(Vec3f::ZERO.length(), 0.0);
        assert_eq!(Vector::<f32, 7>::ZERO.length(), 0.0);
        assert_eq!(vec3(-1.0, 0.0, 0.0).length(), 1.0);
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec3(1, 2, 3).extend(1), vec4(1, 2, 3, 1));
        assert_eq!(vec4(1, 2, 3, 1).truncate(), vec3(1, 2, 3));
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", vec3(1, 2, 3)), "(1, 2, 3)");
    }
}
