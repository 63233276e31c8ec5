/// Which report sections one invocation should produce. Built once from the
/// command line, immutable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Model, frequency range, current clock and temperature.
    pub show_all: bool,
    pub show_temperature: bool,
    pub show_current_frequency: bool,
    /// The static version banner; does not gate any metric read.
    pub show_version: bool,
    /// Unit switch for the temperature section. Implies `show_temperature`;
    /// the constructor upholds that, not the consumers.
    pub use_fahrenheit: bool,
}

impl DisplayConfig {
    /// True when no section at all was asked for. The caller turns this into
    /// a usage error rather than silently printing nothing.
    pub fn selects_nothing(&self) -> bool {
        !(self.show_all
            || self.show_temperature
            || self.show_current_frequency
            || self.show_version)
    }

    pub fn wants_current_frequency(&self) -> bool {
        self.show_all || self.show_current_frequency
    }

    pub fn wants_temperature(&self) -> bool {
        self.show_all || self.show_temperature
    }
}

/// Outcome of a single integer pseudo-file read. A missing, unreadable or
/// unparseable file degrades to `Unavailable` instead of failing the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetricReading {
    /// Raw kernel value in milli-units (kHz, milli-degrees Celsius).
    Value(i64),
    #[default]
    Unavailable,
}

impl MetricReading {
    pub fn value(self) -> Option<i64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unavailable => None,
        }
    }
}

/// Everything the reader collected for one invocation. Values stay in the
/// kernel's milli-units; conversion to engineering units happens at
/// formatting time. `model` is `None` both when the read failed and when it
/// was never selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub model: Option<String>,
    pub freq_min_khz: MetricReading,
    pub freq_max_khz: MetricReading,
    pub freq_cur_khz: MetricReading,
    pub temp_millicelsius: MetricReading,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_detected() {
        assert!(DisplayConfig::default().selects_nothing());
    }

    #[test]
    fn any_single_flag_counts_as_a_selection() {
        for config in [
            DisplayConfig {
                show_all: true,
                ..Default::default()
            },
            DisplayConfig {
                show_temperature: true,
                ..Default::default()
            },
            DisplayConfig {
                show_current_frequency: true,
                ..Default::default()
            },
            DisplayConfig {
                show_version: true,
                ..Default::default()
            },
        ] {
            assert!(!config.selects_nothing(), "{config:?}");
        }
    }

    #[test]
    fn show_all_implies_every_metric_section() {
        let config = DisplayConfig {
            show_all: true,
            ..Default::default()
        };
        assert!(config.wants_current_frequency());
        assert!(config.wants_temperature());
    }

    #[test]
    fn readings_default_to_unavailable() {
        assert_eq!(MetricReading::default(), MetricReading::Unavailable);
        assert_eq!(MetricReading::Unavailable.value(), None);
        assert_eq!(MetricReading::Value(600_000).value(), Some(600_000));
    }
}
