#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(settings) = forecast_dash::fuzzing::apply_config_from_toml(input) {
        debug_assert!(matches!(settings.endpoint.scheme(), "http" | "https"));
    }
});
