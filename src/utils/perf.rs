/// Times `$block` and warns when it runs longer than `$threshold_micros` (500 = 0.5ms).
/// Compiles down to the bare block when `DF.log_performance` is off.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $threshold_micros:expr, $block:block) => {{
        if $crate::config::DF.log_performance {
            let started = $crate::utils::AppInstant::now();
            let out = $block;
            let elapsed = started.elapsed();
            if elapsed.as_micros() > $threshold_micros {
                log::warn!(
                    "Slow scope '{}': {:.3}ms over a {:.3}ms budget ({} build)",
                    $name,
                    elapsed.as_secs_f64() * 1000.0,
                    $threshold_micros as f64 / 1000.0,
                    if cfg!(debug_assertions) { "debug" } else { "release" }
                );
            }
            out
        } else {
            $block
        }
    }};
}
