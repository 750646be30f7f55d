#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(points) = forecast_dash::fuzzing::parse_forecast_response_input(data) {
        let rendered = forecast_dash::http::render_forecast_json(&points);
        debug_assert!(rendered.is_ok());
    }
});
