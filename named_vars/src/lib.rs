//! Named views over a vector of scalar variables.
//!
//! A struct such as `Inputs<T> { x1: T, x2: T }` deriving [`NamedVars`]
//! can be flattened into an `SVector<T, 2>` and rebuilt from one, so the
//! same struct works for plain `f64` points, seeded dual inputs and
//! gradients.

pub use nalgebra;

pub trait NamedVars<T: nalgebra::Scalar, const N: usize>: Copy + Clone {
    const SIZE: usize = N;

    /// Field names in declaration order.
    const NAMES: [&'static str; N];

    fn to_svector(&self) -> nalgebra::SVector<T, N>;
    fn from_svector(v: &nalgebra::SVector<T, N>) -> Self;

    fn named(&self) -> Vec<(&'static str, T)> {
        let v = self.to_svector();
        Self::NAMES
            .iter()
            .zip(v.iter())
            .map(|(name, value)| (*name, value.clone()))
            .collect()
    }
}
