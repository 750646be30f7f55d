#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(settings) = forecast_dash::fuzzing::apply_config_from_json(data) {
        debug_assert!(matches!(settings.endpoint.scheme(), "http" | "https"));
        if settings.strict_bounds {
            debug_assert!((1..=12).contains(&settings.start_month));
            debug_assert!((1..=36).contains(&settings.forecast_length));
        }
        debug_assert!(settings.canvas.padding * 2.0 < settings.canvas.width);
        debug_assert!(settings.canvas.padding * 2.0 < settings.canvas.height);
    }
});
