/// Rounds half away from zero to `places` decimals.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_to_places() {
        assert_eq!(round_to(133.333, 1), 133.3);
        assert_eq!(round_to(125.89, 1), 125.9);
        assert_eq!(round_to(2207.2, 0), 2207.0);
        assert_eq!(round_to(3034.9, 0), 3035.0);
    }
}
