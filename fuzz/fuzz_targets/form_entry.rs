#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (start, length) = input.split_once('\n').unwrap_or((input, ""));
    if let Ok(request) = forecast_dash::fuzzing::parse_form_entry_input(start, length) {
        debug_assert!(request.months().windows(2).all(|pair| match pair {
            [a, b] => b - a == 1,
            _ => true,
        }));
    }
});
