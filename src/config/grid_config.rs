use crate::error::{WindowError, WindowResult};
use crate::grid::CellBounds;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for one grid arrangement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Upper bound on cell width, applied before `min_width`
    pub max_width: Option<i32>,
    pub max_height: Option<i32>,
    /// Lower bound on cell width, wins over `max_width` on conflict
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,
    /// Index of the monitor to tile
    pub monitor: usize,
    /// Pause between window placements so the window manager can settle,
    /// stored in the file as fractional seconds
    #[serde(rename = "delay_secs", with = "delay_secs")]
    pub delay: Duration,
}

mod delay_secs {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(delay.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs)
            .map_err(|err| D::Error::custom(format!("invalid delay {}: {}", secs, err)))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 2,
            max_width: None,
            max_height: None,
            min_width: None,
            min_height: None,
            monitor: 0,
            delay: Duration::from_millis(200),
        }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_max_size(mut self, width: Option<i32>, height: Option<i32>) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    pub fn with_min_size(mut self, width: Option<i32>, height: Option<i32>) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    pub fn with_monitor(mut self, monitor: usize) -> Self {
        self.monitor = monitor;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn bounds(&self) -> CellBounds {
        CellBounds {
            max_width: self.max_width,
            max_height: self.max_height,
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }

    /// Get the pause between placements as Duration
    pub fn inter_window_delay(&self) -> Duration {
        self.delay
    }

    /// Load and validate configuration from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> WindowResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: GridConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> WindowResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> WindowResult<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `ARRANGE_*` variables; unparsable values are ignored
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parsed<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
            value.and_then(|v| v.trim().parse::<T>().ok())
        }

        if let Some(rows) = parsed(lookup("ARRANGE_ROWS")) {
            self.rows = rows;
        }
        if let Some(cols) = parsed(lookup("ARRANGE_COLS")) {
            self.cols = cols;
        }
        if let Some(monitor) = parsed(lookup("ARRANGE_MONITOR")) {
            self.monitor = monitor;
        }
        if let Some(delay) = parsed::<f64>(lookup("ARRANGE_DELAY_SECS"))
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        {
            self.delay = delay;
        }
        if let Some(width) = parsed(lookup("ARRANGE_MAX_WIDTH")) {
            self.max_width = Some(width);
        }
        if let Some(height) = parsed(lookup("ARRANGE_MAX_HEIGHT")) {
            self.max_height = Some(height);
        }
        if let Some(width) = parsed(lookup("ARRANGE_MIN_WIDTH")) {
            self.min_width = Some(width);
        }
        if let Some(height) = parsed(lookup("ARRANGE_MIN_HEIGHT")) {
            self.min_height = Some(height);
        }
    }

    /// Validate configuration values
    ///
    /// A zero row or column count is accepted: arranging with it does nothing.
    pub fn validate(&self) -> WindowResult<()> {
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value > i32::MAX as usize {
                return Err(WindowError::Config(format!(
                    "{} must be at most {}, got {}",
                    name,
                    i32::MAX,
                    value
                )));
            }
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(WindowError::Config(format!(
                "{}x{} grid has too many cells",
                self.rows, self.cols
            )));
        }

        let bounds = [
            ("max_width", self.max_width),
            ("max_height", self.max_height),
            ("min_width", self.min_width),
            ("min_height", self.min_height),
        ];
        for (name, value) in bounds {
            if let Some(v) = value {
                if v <= 0 {
                    return Err(WindowError::Config(format!(
                        "{} must be positive, got {}",
                        name, v
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let config = GridConfig::default();
        assert_eq!(config.monitor, 0);
        assert_eq!(config.inter_window_delay(), Duration::from_millis(200));
        assert_eq!(config.bounds(), CellBounds::default());
    }

    #[test]
    fn env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ARRANGE_ROWS", "3"),
            ("ARRANGE_COLS", "4"),
            ("ARRANGE_MIN_WIDTH", "150"),
            ("ARRANGE_DELAY_SECS", "not a number"),
        ]
        .into_iter()
        .collect();

        let mut config = GridConfig::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, 4);
        assert_eq!(config.min_width, Some(150));
        assert_eq!(config.delay, Duration::from_millis(200));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{"rows": 1, "cols": 3}"#).unwrap();
        assert_eq!(config.cell_count(), 3);
        assert_eq!(config.delay, Duration::from_millis(200));
        assert_eq!(config.max_width, None);
    }

    #[test]
    fn non_positive_bounds_rejected() {
        let config = GridConfig::new(2, 2).with_max_size(Some(0), None);
        assert!(matches!(config.validate(), Err(WindowError::Config(_))));
        assert!(GridConfig::new(0, 0).validate().is_ok());
    }

    #[test]
    fn fractional_delay_is_kept() {
        let config = GridConfig::new(2, 2).with_delay(Duration::from_micros(500));
        assert_eq!(config.inter_window_delay(), Duration::from_micros(500));

        let mut config = GridConfig::default();
        config.apply_env(|key| (key == "ARRANGE_DELAY_SECS").then(|| "0.25".to_string()));
        assert_eq!(config.inter_window_delay(), Duration::from_millis(250));
    }

    #[test]
    fn delay_is_stored_as_seconds() {
        let config: GridConfig = serde_json::from_str(r#"{"delay_secs": 1.5}"#).unwrap();
        assert_eq!(config.delay, Duration::from_millis(1500));

        let json = serde_json::to_value(GridConfig::default()).unwrap();
        assert_eq!(json["delay_secs"], serde_json::json!(0.2));

        assert!(serde_json::from_str::<GridConfig>(r#"{"delay_secs": -1.0}"#).is_err());
    }

    #[test]
    fn oversized_grid_from_env_is_rejected() {
        let mut config = GridConfig::default();
        config.apply_env(|key| (key == "ARRANGE_COLS").then(|| "4294967296".to_string()));
        assert_eq!(config.cols as u64, 4_294_967_296);
        assert!(matches!(config.validate(), Err(WindowError::Config(_))));
    }
}
