use crate::core::{CpuSnapshot, DisplayConfig, MetricReading};

/// Printed in place of a model string the reader could not produce.
const UNKNOWN_MODEL: &str = "Unknown model";

const RELEASE_DATE: &str = "25 August 2026";
const COPYRIGHT: &str = "Copyright © 2026 the picpu authors";

/// Lay out the report for the selected sections. Pure function of the
/// configuration and the snapshot: no I/O, no hidden state, so two renders
/// of the same inputs are identical. Section order is fixed: banner, model
/// and frequency range, current clock, temperature.
pub fn render_report(config: &DisplayConfig, snapshot: &CpuSnapshot) -> String {
    let mut out = String::new();

    if config.show_version {
        out.push_str(&format!(
            "Version: {} {}\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str(&format!("Released: {RELEASE_DATE}\n"));
        out.push_str(&format!("{COPYRIGHT}\n"));
    }

    if config.show_all {
        out.push_str(&format!(
            "Model: {}\n",
            snapshot.model.as_deref().unwrap_or(UNKNOWN_MODEL)
        ));
        out.push_str(&format!("CPU Min MHz: {}\n", mhz(snapshot.freq_min_khz)));
        out.push_str(&format!("CPU Max MHz: {}\n", mhz(snapshot.freq_max_khz)));
    }

    if config.wants_current_frequency() {
        out.push_str(&format!(
            "Current CPU MHz: {}\n",
            mhz(snapshot.freq_cur_khz)
        ));
    }

    if config.wants_temperature() {
        out.push_str(&format!(
            "Current CPU Temp: {}\n",
            temperature(snapshot.temp_millicelsius, config.use_fahrenheit)
        ));
    }

    out
}

/// kHz reading rendered as MHz to two decimals, or the Unknown fallback.
fn mhz(reading: MetricReading) -> String {
    reading.value().map_or_else(
        || "Unknown".to_string(),
        |khz| format!("{:.2} MHz", khz as f64 / 1000.0),
    )
}

/// Milli-degrees Celsius rendered as degrees to two decimals, or the Unknown
/// fallback. Fahrenheit is derived from the fractional Celsius value;
/// truncating to whole degrees first would skew the result by up to 1.8 °F.
fn temperature(reading: MetricReading, fahrenheit: bool) -> String {
    reading.value().map_or_else(
        || "Unknown".to_string(),
        |millicelsius| {
            let celsius = millicelsius as f64 / 1000.0;
            if fahrenheit {
                format!("{:.2}°F", celsius * 1.8 + 32.0)
            } else {
                format!("{celsius:.2}°C")
            }
        },
    )
}
