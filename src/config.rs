// config.rs - Effect tuning
//
// All knobs are plain serde structs with defaults matching the landing page.
// Partial JSON is fine: missing fields fall back to the defaults. Burst JSON
// is layered over a preset, so nested tween profiles keep the preset's values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FxError;

/// Cursor trail (canvas variant)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub max_particles: usize,
    /// Ticks a spark stays alive
    pub life: i32,
    pub initial_opacity: f32,
    /// Opacity lost per tick
    pub fade: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Velocity components are drawn from [-max_speed, max_speed)
    pub max_speed: f32,
    pub color: [u8; 3],
    pub seed: Option<u32>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_particles: 20,
            life: 100,
            initial_opacity: 0.8,
            fade: 0.01,
            radius_min: 2.0,
            radius_max: 7.0,
            max_speed: 1.0,
            color: [96, 165, 250],
            seed: None,
        }
    }
}

impl TrailConfig {
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FxError> {
        if self.max_particles == 0 {
            return Err(FxError::InvalidConfig("max_particles must be positive"));
        }
        if self.life <= 0 {
            return Err(FxError::InvalidConfig("life must be positive"));
        }
        if !(self.radius_min >= 0.0 && self.radius_min <= self.radius_max && self.radius_max.is_finite()) {
            return Err(FxError::InvalidConfig("radius range is inverted, negative or infinite"));
        }
        if !(self.max_speed >= 0.0 && self.max_speed.is_finite()) {
            return Err(FxError::InvalidConfig("max_speed must be finite and non-negative"));
        }
        if !(self.fade >= 0.0 && self.fade.is_finite()) {
            return Err(FxError::InvalidConfig("fade must be finite and non-negative"));
        }
        if !self.initial_opacity.is_finite() {
            return Err(FxError::InvalidConfig("initial_opacity must be finite"));
        }
        Ok(())
    }
}

/// One tween handed to the external animation engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Per-element x/y offsets are drawn from [-spread/2, spread/2)
    pub spread: f32,
    pub scale: f32,
    pub opacity: f32,
    pub duration: f32,
    pub stagger: Option<f32>,
    pub ease: String,
    /// -1 repeats forever
    pub repeat: Option<i32>,
    pub yoyo: bool,
    /// Scroll trigger start position, e.g. "top 90%"
    pub start: Option<String>,
    /// Scroll-linked smoothing in seconds
    pub scrub: Option<f32>,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            spread: 0.0,
            scale: 1.0,
            opacity: 1.0,
            duration: 1.0,
            stagger: None,
            ease: "none".into(),
            repeat: None,
            yoyo: false,
            start: None,
            scrub: None,
        }
    }
}

impl TweenConfig {
    /// Particles fly in from scattered offsets, scaled down and invisible
    pub fn entrance(spread: f32, duration: f32) -> Self {
        Self {
            spread,
            scale: 0.0,
            opacity: 0.0,
            duration,
            stagger: Some(0.05),
            ease: "power4.out".into(),
            start: Some("top 90%".into()),
            ..Self::default()
        }
    }

    /// Endless scroll-scrubbed wander
    pub fn drift(spread: f32, scale: f32, opacity: f32, duration: f32) -> Self {
        Self {
            spread,
            scale,
            opacity,
            duration,
            ease: "sine.inOut".into(),
            repeat: Some(-1),
            yoyo: true,
            scrub: Some(1.0),
            ..Self::default()
        }
    }
}

/// Particle burst (DOM variant)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub batch: usize,
    pub class_name: String,
    pub entrance: TweenConfig,
    pub drift: TweenConfig,
    pub seed: Option<u32>,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self::contact()
    }
}

impl BurstConfig {
    pub fn contact() -> Self {
        Self {
            batch: 80,
            class_name: "particle".into(),
            entrance: TweenConfig::entrance(800.0, 3.5),
            drift: TweenConfig::drift(1200.0, 1.5, 0.3, 7.0),
            seed: None,
        }
    }

    pub fn footer() -> Self {
        Self {
            entrance: TweenConfig::entrance(1000.0, 4.0),
            drift: TweenConfig::drift(1500.0, 2.0, 0.2, 8.0),
            ..Self::contact()
        }
    }

    pub fn preset(name: &str) -> Result<Self, FxError> {
        match name {
            "contact" => Ok(Self::contact()),
            "footer" => Ok(Self::footer()),
            _ => Err(FxError::UnknownPreset(name.to_string())),
        }
    }

    /// Accepts either a preset name or a JSON object.
    ///
    /// JSON overrides are merged field by field onto the preset named by its
    /// `"preset"` key, or onto `contact` when there is none.
    pub fn parse(preset: &str) -> Result<Self, FxError> {
        let preset = preset.trim();
        if !preset.starts_with('{') {
            return Self::preset(preset);
        }

        let mut overrides: Value = serde_json::from_str(preset)?;
        let base = match overrides.as_object_mut().and_then(|o| o.remove("preset")) {
            Some(Value::String(name)) => Self::preset(&name)?,
            Some(_) => return Err(FxError::InvalidConfig("preset must be a string")),
            None => Self::contact(),
        };

        let mut merged = serde_json::to_value(base)?;
        merge(&mut merged, overrides);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FxError> {
        if self.batch == 0 {
            return Err(FxError::InvalidConfig("batch must be positive"));
        }
        for tween in [&self.entrance, &self.drift] {
            if !(tween.spread >= 0.0 && tween.spread.is_finite()) {
                return Err(FxError::InvalidConfig("spread must be finite and non-negative"));
            }
        }
        Ok(())
    }
}

// Objects merge key by key; anything else replaces the base value
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, overrides) => *base = overrides,
    }
}

/// Cursor-following orb
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbConfig {
    /// Fraction of the remaining distance covered each tick
    pub follow: f32,
    /// Full width of the random wobble added to the target each tick
    pub jitter: f32,
    /// Multiplier applied to window scroll
    pub scroll_parallax: f32,
    /// Subtracted from the position so the orb is centred on it
    pub offset: f32,
    pub seed: Option<u32>,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            follow: 0.1,
            jitter: 150.0,
            scroll_parallax: 0.3,
            offset: 30.0,
            seed: None,
        }
    }
}

impl OrbConfig {
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FxError> {
        if !(self.follow > 0.0 && self.follow <= 1.0) {
            return Err(FxError::InvalidConfig("follow must be in (0, 1]"));
        }
        if !(self.jitter >= 0.0 && self.jitter.is_finite()) {
            return Err(FxError::InvalidConfig("jitter must be finite and non-negative"));
        }
        if !(self.scroll_parallax.is_finite() && self.offset.is_finite()) {
            return Err(FxError::InvalidConfig("scroll_parallax and offset must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_defaults_match_page() {
        let c = TrailConfig::default();
        assert_eq!(c.max_particles, 20);
        assert_eq!(c.life, 100);
        assert_eq!(c.color, [96, 165, 250]);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = TrailConfig::from_json(r#"{"max_particles": 5, "seed": 7}"#).unwrap();
        assert_eq!(c.max_particles, 5);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.life, 100);
    }

    #[test]
    fn inverted_radius_rejected() {
        let err = TrailConfig::from_json(r#"{"radius_min": 9, "radius_max": 3}"#).unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = TrailConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, FxError::Json(_)));
    }

    #[test]
    fn burst_presets() {
        let contact = BurstConfig::preset("contact").unwrap();
        let footer = BurstConfig::preset("footer").unwrap();
        assert_eq!(contact.batch, 80);
        assert_eq!(footer.batch, 80);
        assert_eq!(contact.entrance.spread, 800.0);
        assert_eq!(footer.drift.spread, 1500.0);
        assert_eq!(footer.drift.scale, 2.0);
        assert_eq!(contact.drift.repeat, Some(-1));
        assert!(contact.drift.yoyo);
        assert_eq!(contact.entrance.start.as_deref(), Some("top 90%"));
        assert!(matches!(
            BurstConfig::preset("hero"),
            Err(FxError::UnknownPreset(_))
        ));
    }

    #[test]
    fn burst_parse_accepts_json_or_name() {
        let c = BurstConfig::parse(r#"{"batch": 12}"#).unwrap();
        assert_eq!(c.batch, 12);
        assert_eq!(c.class_name, "particle");
        assert_eq!(BurstConfig::parse(" footer ").unwrap(), BurstConfig::footer());
        assert!(BurstConfig::parse(r#"{"batch": 0}"#).is_err());
    }

    #[test]
    fn burst_json_layers_over_preset_tweens() {
        let c = BurstConfig::parse(r#"{"entrance": {"duration": 2.0}}"#).unwrap();
        let contact = BurstConfig::contact();
        assert_eq!(c.entrance.duration, 2.0);
        assert_eq!(c.entrance.ease, "power4.out");
        assert_eq!(c.entrance.opacity, 0.0);
        assert_eq!(c.entrance.scale, 0.0);
        assert_eq!(c.entrance.stagger, Some(0.05));
        assert_eq!(c.entrance.start.as_deref(), Some("top 90%"));
        assert_eq!(c.entrance.spread, contact.entrance.spread);
        assert_eq!(c.drift, contact.drift);
    }

    #[test]
    fn burst_json_picks_base_preset() {
        let c = BurstConfig::parse(r#"{"preset": "footer", "drift": {"opacity": 0.5}}"#).unwrap();
        let footer = BurstConfig::footer();
        assert_eq!(c.entrance, footer.entrance);
        assert_eq!(c.drift.opacity, 0.5);
        assert_eq!(c.drift.spread, 1500.0);
        assert_eq!(c.drift.repeat, Some(-1));

        assert!(matches!(
            BurstConfig::parse(r#"{"preset": "hero"}"#),
            Err(FxError::UnknownPreset(_))
        ));
        assert!(matches!(
            BurstConfig::parse(r#"{"preset": 3}"#),
            Err(FxError::InvalidConfig(_))
        ));
    }

    #[test]
    fn infinite_values_rejected() {
        assert!(TrailConfig::from_json(r#"{"max_speed": 1e39}"#).is_err());
        assert!(TrailConfig::from_json(r#"{"fade": 1e39}"#).is_err());
        assert!(TrailConfig::from_json(r#"{"radius_max": 1e39}"#).is_err());
        assert!(TrailConfig::from_json(r#"{"initial_opacity": -1e39}"#).is_err());
        assert!(BurstConfig::parse(r#"{"drift": {"spread": 1e39}}"#).is_err());
        assert!(OrbConfig::from_json(r#"{"jitter": 1e39}"#).is_err());
        assert!(OrbConfig::from_json(r#"{"offset": 1e39}"#).is_err());
    }

    #[test]
    fn orb_follow_range() {
        assert!(OrbConfig::default().validate().is_ok());
        assert!(OrbConfig::from_json(r#"{"follow": 0}"#).is_err());
        assert!(OrbConfig::from_json(r#"{"follow": 1.5}"#).is_err());
    }
}
