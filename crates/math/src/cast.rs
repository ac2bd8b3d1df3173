/// Converts an `f64` constant into any float type.
///
/// Every `num::Float` can represent (or round) any finite `f64`, so this only produces NaN when
/// the input is itself NaN.
#[must_use]
pub fn lit<T: num::Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lit() {
        assert_eq!(lit::<f32>(0.5), 0.5f32);
        assert_eq!(lit::<f64>(-2.25), -2.25f64);
        assert!(lit::<f32>(f64::NAN).is_nan());
    }
}
