use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

/// Element types a [`Vector`] can hold.
///
/// Blanket-implemented for every type with value semantics and the four
/// arithmetic operators in both binary and compound-assignment form.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
}

impl<T> Scalar for T where
    T: Copy
        + Default
        + PartialEq
        + fmt::Debug
        + fmt::Display
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
{
}

/// Mathematical `N`-dimensional vector used for positions, bounds and colors.
///
/// The dimension is part of the type and never changes. Indexing performs no
/// checks of its own; an index `>= N` panics like any array access.
///
/// Division follows the element type: floats yield `inf`/`NaN`, integers panic
/// on a zero divisor. Callers avoid zero divisors.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<T, const N: usize>([T; N]);

/// 2D position / extent in logical pixels.
pub type Vec2f = Vector<f32, 2>;

/// 2D unsigned vector (pixel sizes, texel coordinates).
pub type UVec2 = Vector<u32, 2>;

/// Linear RGBA color, one `f32` per channel.
pub type Color = Vector<f32, 4>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Builds a vector from exactly `N` elements.
    #[inline]
    pub const fn new(elements: [T; N]) -> Self {
        Self(elements)
    }

    /// Builds a vector with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Every element set to `T::default()` (zero for numeric types).
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::default())
    }

    /// Dimension of the vector.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Applies `f` to every element, producing a vector of the same dimension.
    #[inline]
    pub fn map<U: Scalar>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

impl<T: Scalar> Vector<T, 2> {
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }
}

impl<T: Scalar> Vector<T, 4> {
    #[inline]
    pub fn r(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> T {
        self.0[2]
    }

    #[inline]
    pub fn a(&self) -> T {
        self.0[3]
    }
}

impl Vector<f32, 2> {
    pub const ZERO: Self = Self([0.0, 0.0]);

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Vector<f32, 4> {
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self(elements)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, pos: usize) -> &T {
        &self.0[pos]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        &mut self.0[pos]
    }
}

// ── element-wise vector ⊕ vector ──────────────────────────────────────────
//
// The binary operator always runs the compound form on a copy, so the two
// can never disagree.

macro_rules! elementwise_ops {
    ($($op:ident::$method:ident => $op_assign:ident::$method_assign:ident;)*) => {$(
        impl<T: Scalar, const N: usize> $op_assign for Vector<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                    $op_assign::$method_assign(lhs, rhs);
                }
            }
        }

        impl<T: Scalar, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self {
                $op_assign::$method_assign(&mut self, rhs);
                self
            }
        }
    )*};
}

elementwise_ops! {
    Add::add => AddAssign::add_assign;
    Sub::sub => SubAssign::sub_assign;
    Mul::mul => MulAssign::mul_assign;
    Div::div => DivAssign::div_assign;
}

// ── vector ⊕ scalar ───────────────────────────────────────────────────────

macro_rules! scalar_op {
    ($t:ty, $op:ident::$method:ident => $op_assign:ident::$method_assign:ident) => {
        impl<const N: usize> $op_assign<$t> for Vector<$t, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: $t) {
                for element in &mut self.0 {
                    $op_assign::$method_assign(element, rhs);
                }
            }
        }

        impl<const N: usize> $op<$t> for Vector<$t, N> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: $t) -> Self {
                $op_assign::$method_assign(&mut self, rhs);
                self
            }
        }
    };
}

macro_rules! scalar_ops {
    ($($t:ty),* $(,)?) => {$(
        scalar_op!($t, Add::add => AddAssign::add_assign);
        scalar_op!($t, Sub::sub => SubAssign::sub_assign);
        scalar_op!($t, Mul::mul => MulAssign::mul_assign);
        scalar_op!($t, Div::div => DivAssign::div_assign);
    )*};
}

scalar_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Negation exists only for element types that can be negated, so it is
/// missing for unsigned vectors:
///
/// ```compile_fail
/// use hawtk_engine::coords::UVec2;
/// let _ = -UVec2::new([1, 2]);
/// ```
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("vec{")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("}")
    }
}

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]`, which has no padding
// and is valid for any bit pattern whenever `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq<const N: usize>(a: Vector<f32, N>, b: Vector<f32, N>) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= 1e-5 * x.abs().max(1.0))
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn default_is_zero() {
        assert_eq!(Vec2f::default(), Vec2f::new([0.0, 0.0]));
        assert_eq!(UVec2::default(), UVec2::splat(0));
    }

    #[test]
    fn splat_fills_every_element() {
        let c = Color::splat(1.0);
        assert_eq!(c, Color::WHITE);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn named_accessors() {
        let v = Vec2f::new([3.0, 4.0]);
        assert_eq!((v.x(), v.y()), (3.0, 4.0));
        let c = Color::rgba(0.1, 0.2, 0.3, 0.4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn index_mut_writes_element() {
        let mut v = Vector::<i32, 3>::new([1, 2, 3]);
        v[1] = 20;
        assert_eq!(v.into_array(), [1, 20, 3]);
    }

    #[test]
    #[should_panic]
    fn index_past_dimension_panics() {
        let v = Vec2f::ZERO;
        let _ = v[2];
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_then_sub_restores() {
        let u = Vector::<f32, 3>::new([1.5, -2.0, 8.25]);
        let v = Vector::<f32, 3>::new([0.5, 4.0, -1.0]);
        assert!(approx_eq((u + v) - v, u));

        let ui = Vector::<i64, 4>::new([1, 2, 3, 4]);
        let vi = Vector::<i64, 4>::new([-7, 0, 9, 100]);
        assert_eq!((ui + vi) - vi, ui);
    }

    #[test]
    fn mul_then_div_restores() {
        let u = Color::rgba(0.2, 0.4, 0.6, 1.0);
        for s in [0.5_f32, 3.0, -7.25, 1e3] {
            assert!(approx_eq((u * s) / s, u), "failed for s = {s}");
        }
    }

    #[test]
    fn binary_matches_compound() {
        let a = Vec2f::new([2.0, 3.0]);
        let b = Vec2f::new([4.0, 0.5]);

        let mut c = a;
        c *= b;
        assert_eq!(a * b, c);

        let mut d = a;
        d -= 1.0;
        assert_eq!(a - 1.0, d);
    }

    #[test]
    fn elementwise_vector_ops() {
        let a = UVec2::new([8, 9]);
        let b = UVec2::new([2, 3]);
        assert_eq!(a + b, UVec2::new([10, 12]));
        assert_eq!(a - b, UVec2::new([6, 6]));
        assert_eq!(a * b, UVec2::new([16, 27]));
        assert_eq!(a / b, UVec2::new([4, 3]));
    }

    #[test]
    fn scalar_ops_apply_to_every_element() {
        let v = Vector::<i32, 3>::new([1, 2, 3]);
        assert_eq!(v + 1, Vector::new([2, 3, 4]));
        assert_eq!(v * 2, Vector::new([2, 4, 6]));
        assert_eq!(v - 1, Vector::new([0, 1, 2]));
        assert_eq!((v * 4) / 2, Vector::new([2, 4, 6]));
    }

    #[test]
    fn negation_for_signed_types() {
        assert_eq!(-Vector::<i32, 2>::new([1, -2]), Vector::new([-1, 2]));
        assert_eq!(-Vec2f::new([0.5, 0.0]), Vec2f::new([-0.5, -0.0]));
    }

    #[test]
    fn map_can_change_element_type() {
        let px = UVec2::new([3, 7]).map(|v| v as f32 * 0.5);
        assert_eq!(px, Vec2f::new([1.5, 3.5]));
    }

    #[test]
    fn float_division_by_zero_is_infinite() {
        let v = Vec2f::new([1.0, -1.0]) / 0.0;
        assert!(v.x().is_infinite() && v.y().is_infinite());
        assert!(!v.is_finite());
    }

    // ── formatting / bytes ────────────────────────────────────────────────

    #[test]
    fn display_lists_elements() {
        assert_eq!(Vector::<i32, 3>::new([1, 2, 3]).to_string(), "vec{1, 2, 3}");
        assert_eq!(Vec2f::new([0.5, 2.0]).to_string(), "vec{0.5, 2}");
        assert_eq!(Vector::<u8, 0>::new([]).to_string(), "vec{}");
    }

    #[test]
    fn pod_layout_matches_array() {
        let c = Color::rgba(1.0, 2.0, 3.0, 4.0);
        let floats: &[f32] = bytemuck::cast_slice(core::slice::from_ref(&c));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(core::mem::size_of::<Color>(), 16);
    }
}
