use crate::core::{CpuSnapshot, DisplayConfig, MetricReading};
use crate::util::sysfs;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Byte cap for the model-identifier read. Firmware strings are short; a
/// pseudo-file still producing data past this point is malformed.
const MODEL_READ_LIMIT: u64 = 150;

const MODEL_PATH: &str = "/proc/device-tree/model";
const FREQ_MIN_PATH: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_min_freq";
const FREQ_MAX_PATH: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_max_freq";
const FREQ_CUR_PATH: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_cur_freq";
const TEMP_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Where each logical metric lives. The defaults are the kernel's well-known
/// paths; tests substitute fixture files instead of touching real devices.
#[derive(Debug, Clone)]
pub struct MetricPaths {
    pub model: PathBuf,
    pub freq_min: PathBuf,
    pub freq_max: PathBuf,
    pub freq_cur: PathBuf,
    pub temperature: PathBuf,
}

impl Default for MetricPaths {
    fn default() -> Self {
        Self {
            model: PathBuf::from(MODEL_PATH),
            freq_min: PathBuf::from(FREQ_MIN_PATH),
            freq_max: PathBuf::from(FREQ_MAX_PATH),
            freq_cur: PathBuf::from(FREQ_CUR_PATH),
            temperature: PathBuf::from(TEMP_PATH),
        }
    }
}

/// Read one integer metric. A failure is local to the field: it costs one
/// warning on stderr and the reading degrades to `Unavailable`. Absent
/// pseudo-files are normal on non-matching hardware, so nothing here is
/// fatal and nothing is retried.
pub fn read_metric(path: &Path) -> MetricReading {
    debug!("reading {}", path.display());
    match sysfs::read_integer(path) {
        Ok(value) => MetricReading::Value(value),
        Err(e) => {
            warn!("{e}");
            MetricReading::Unavailable
        }
    }
}

/// Read the model identifier. Returns `None` on failure and leaves the
/// formatter to print its fallback.
pub fn read_model(path: &Path) -> Option<String> {
    debug!("reading {}", path.display());
    match sysfs::read_first_line(path, MODEL_READ_LIMIT) {
        Ok(model) => Some(model),
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}

/// Collect exactly the readings the configuration selects. Unselected
/// metrics are never opened, so irrelevant sensors cost neither I/O nor
/// stderr noise; their fields keep the unavailable default.
pub fn collect_snapshot(config: &DisplayConfig, paths: &MetricPaths) -> CpuSnapshot {
    let mut snapshot = CpuSnapshot::default();

    if config.show_all {
        snapshot.model = read_model(&paths.model);
        snapshot.freq_min_khz = read_metric(&paths.freq_min);
        snapshot.freq_max_khz = read_metric(&paths.freq_max);
    }

    if config.wants_current_frequency() {
        snapshot.freq_cur_khz = read_metric(&paths.freq_cur);
    }

    if config.wants_temperature() {
        snapshot.temp_millicelsius = read_metric(&paths.temperature);
    }

    snapshot
}
