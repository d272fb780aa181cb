use serde::Deserialize;
use scaleline::{AppConfig, EngineError, Rgb};

/// Host-tunable settings. Every field is optional in JSON; missing fields
/// take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolarSettings {
    /// Canvas width in pixels (default: 1920).
    pub canvas_width: f32,
    /// Canvas height in pixels (default: 600).
    pub canvas_height: f32,
    /// Pixels kept free on each side when fitting the system (default: 100).
    pub margin: f64,
    /// Relative scale change per wheel notch (default: 0.1).
    pub zoom_step: f64,
    /// Maximum zoom as a multiple of the fitted scale (default: 200000).
    pub zoom_ceiling: f64,
    /// Offset change per arrow key press, in pixels (default: 50).
    pub pan_step: f64,
    /// Radius floor for planets and moons while the floor is on (default: 2).
    pub planet_min_radius: u32,
    /// Radius floor for the Sun while the floor is on (default: 5).
    pub sun_min_radius: u32,
    /// File name handed to the snapshot sink.
    pub snapshot_path: String,
    /// Frame rate cap (default: 60).
    pub target_fps: f32,
}

impl Default for SolarSettings {
    fn default() -> Self {
        Self {
            canvas_width: 1920.0,
            canvas_height: 600.0,
            margin: 100.0,
            zoom_step: 0.1,
            zoom_ceiling: 200_000.0,
            pan_step: 50.0,
            planet_min_radius: 2,
            sun_min_radius: 5,
            snapshot_path: "solar_system_snapshot.png".to_string(),
            target_fps: 60.0,
        }
    }
}

impl SolarSettings {
    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |msg: String| Err(EngineError::InvalidSettings(msg));
        if !(self.canvas_height > 0.0) {
            return invalid(format!("canvas_height must be positive, got {}", self.canvas_height));
        }
        if !(self.margin >= 0.0) || !(self.canvas_width as f64 > 2.0 * self.margin) {
            return invalid(format!(
                "canvas_width {} leaves no room between margins of {}",
                self.canvas_width, self.margin
            ));
        }
        if !(self.zoom_step > 0.0 && self.zoom_step < 1.0) {
            return invalid(format!("zoom_step must be in (0, 1), got {}", self.zoom_step));
        }
        if !(self.zoom_ceiling >= 1.0) {
            return invalid(format!("zoom_ceiling must be at least 1, got {}", self.zoom_ceiling));
        }
        if !self.pan_step.is_finite() {
            return invalid("pan_step must be finite".to_string());
        }
        if !(self.target_fps > 0.0) {
            return invalid(format!("target_fps must be positive, got {}", self.target_fps));
        }
        if self.snapshot_path.trim().is_empty() {
            return invalid("snapshot_path is empty".to_string());
        }
        Ok(())
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            target_fps: self.target_fps,
            background: Rgb::BLACK,
            ..AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let settings = SolarSettings::from_json("{}").unwrap();
        assert_eq!(settings, SolarSettings::default());
        assert_eq!(settings.snapshot_path, "solar_system_snapshot.png");
    }

    #[test]
    fn partial_json_overrides_fields() {
        let json = r#"{ "pan_step": 25, "sun_min_radius": 8, "snapshot_path": "out/frame.png" }"#;
        let settings = SolarSettings::from_json(json).unwrap();
        assert_eq!(settings.pan_step, 25.0);
        assert_eq!(settings.sun_min_radius, 8);
        assert_eq!(settings.snapshot_path, "out/frame.png");
        assert_eq!(settings.canvas_width, 1920.0);
    }

    #[test]
    fn malformed_json_is_a_settings_error() {
        let err = SolarSettings::from_json("{ pan_step: ").unwrap_err();
        assert!(matches!(err, EngineError::Settings(_)));
    }

    #[test]
    fn margins_must_leave_room() {
        let err = SolarSettings::from_json(r#"{ "canvas_width": 200, "margin": 100 }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSettings(_)));
    }

    #[test]
    fn zoom_limits_are_checked() {
        for json in [r#"{ "zoom_step": 0 }"#, r#"{ "zoom_step": 1.5 }"#, r#"{ "zoom_ceiling": 0.5 }"#] {
            assert!(SolarSettings::from_json(json).is_err(), "{} accepted", json);
        }
    }

    #[test]
    fn config_follows_canvas_settings() {
        let settings = SolarSettings { canvas_width: 1280.0, canvas_height: 400.0, ..Default::default() };
        let config = settings.app_config();
        assert_eq!(config.canvas_width, 1280.0);
        assert_eq!(config.canvas_height, 400.0);
        assert_eq!(config.target_fps, 60.0);
        assert_eq!(config.background, Rgb::BLACK);
    }
}
