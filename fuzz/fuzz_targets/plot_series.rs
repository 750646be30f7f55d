#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((dims, rest)) = data.split_first_chunk::<6>() else {
        return;
    };
    let width = u32::from(u16::from_le_bytes([dims[0], dims[1]]));
    let height = u32::from(u16::from_le_bytes([dims[2], dims[3]]));
    let padding = u32::from(u16::from_le_bytes([dims[4], dims[5]]));

    let series: Vec<(i64, f64)> = rest
        .chunks_exact(8)
        .take(256)
        .enumerate()
        .filter_map(|(idx, chunk)| {
            let bytes: [u8; 8] = chunk.try_into().ok()?;
            let value = f64::from_le_bytes(bytes);
            (value.is_finite() && value.abs() < 1e12).then_some((idx as i64, value))
        })
        .collect();

    let Ok(geometry) = forecast_dash::fuzzing::plot_series_input(&series, width, height, padding)
    else {
        return;
    };
    let Some(geometry) = geometry else {
        debug_assert!(series.is_empty());
        return;
    };
    debug_assert_eq!(geometry.vertices.len(), series.len());
    debug_assert_eq!(geometry.x_labels.len(), series.len());
    let (w, h, p) = (f64::from(width), f64::from(height), f64::from(padding));
    for vertex in &geometry.vertices {
        debug_assert!(vertex.x >= p - 1e-6 && vertex.x <= w - p + 1e-6);
        debug_assert!(vertex.y >= p - 1e-6 && vertex.y <= h - p + 1e-6);
    }
});
