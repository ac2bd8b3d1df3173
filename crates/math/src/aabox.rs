use crate::vector::Vector;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABox<T, const N: usize> {
    pub min: Vector<T, N>,
    pub max: Vector<T, N>,
}

pub type Box2<T> = AABox<T, 2>;

impl<T, const N: usize> AABox<T, N> {
    pub const fn new(min: Vector<T, N>, max: Vector<T, N>) -> Self {
        Self { min, max }
    }
}

impl<T: num::Float, const N: usize> AABox<T, N> {
    pub fn size(self) -> Vector<T, N> {
        self.max - self.min
    }

    pub fn center(&self) -> Vector<T, N> {
        let half = T::one() / (T::one() + T::one());
        Vector::from_fn(|i| self.min[i] * half + self.max[i] * half)
    }
}
