use std::f64::consts::PI;

/// Appends `[sin(2πkt/P), cos(2πkt/P)]` for `k = 1..=order` to `out`.
/// `t_days` is measured in days since 1970-01-01 so profiles do not depend on the history start.
pub(crate) fn push_fourier_terms(out: &mut Vec<f64>, t_days: f64, period: f64, order: usize) {
    for k in 1..=order {
        let angle = 2.0 * PI * k as f64 * t_days / period;
        out.push(angle.sin());
        out.push(angle.cos());
    }
}
