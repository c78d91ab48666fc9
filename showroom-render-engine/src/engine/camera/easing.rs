/// Quartic ease-out, used by the reveal and redirect flights.
pub fn ease_out_quart(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv * inv
}

/// Cubic ease-out, used by the focus flights.
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn curves_are_monotonic_and_front_loaded() {
        let mut prev_q = 0.0;
        let mut prev_c = 0.0;
        for step in 1..=100 {
            let t = step as f32 / 100.0;
            let q = ease_out_quart(t);
            let c = ease_out_cubic(t);
            assert!(q >= prev_q);
            assert!(c >= prev_c);
            // Ease-out runs ahead of linear time.
            assert!(q >= t - 1e-6);
            assert!(c >= t - 1e-6);
            prev_q = q;
            prev_c = c;
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(ease_out_quart(1.5), 1.0);
        assert_eq!(ease_out_cubic(-0.5), 0.0);
    }
}
