use crate::core::{math::Vector2, traits::Real};

/// Trait for the point type stored in a ring.
///
/// The ring builder only ever reads coordinates through [Point2D::x] and [Point2D::y] and creates
/// new points (intersects) through [Point2D::from_xy], so any 2D coordinate type can be plugged
/// in by implementing this trait.
pub trait Point2D: Copy + std::fmt::Debug {
    /// Numeric type of the coordinates.
    type Num: Real;

    fn x(&self) -> Self::Num;

    fn y(&self) -> Self::Num;

    /// Construct a point from its coordinates.
    fn from_xy(x: Self::Num, y: Self::Num) -> Self;

    /// Position of the point as a [Vector2].
    #[inline]
    fn pos(&self) -> Vector2<Self::Num> {
        Vector2::new(self.x(), self.y())
    }

    /// Construct a point from a [Vector2] position.
    #[inline]
    fn from_pos(pos: Vector2<Self::Num>) -> Self {
        Self::from_xy(pos.x, pos.y)
    }
}

impl<T> Point2D for Vector2<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self.x
    }

    #[inline]
    fn y(&self) -> T {
        self.y
    }

    #[inline]
    fn from_xy(x: T, y: T) -> Self {
        Vector2::new(x, y)
    }

    #[inline]
    fn pos(&self) -> Vector2<T> {
        *self
    }
}

impl<T> Point2D for [T; 2]
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self[0]
    }

    #[inline]
    fn y(&self) -> T {
        self[1]
    }

    #[inline]
    fn from_xy(x: T, y: T) -> Self {
        [x, y]
    }
}

impl<T> Point2D for (T, T)
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self.0
    }

    #[inline]
    fn y(&self) -> T {
        self.1
    }

    #[inline]
    fn from_xy(x: T, y: T) -> Self {
        (x, y)
    }
}
