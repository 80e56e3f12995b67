// tween.rs - Motion profiles for the external tween engine
//
// The engine takes a plain vars object. Everything except the per-element
// offsets and the trigger element serialises straight from TweenConfig;
// the host fills in those two on its side.

use serde::Serialize;

use crate::config::TweenConfig;
use crate::error::FxError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenKind {
    /// Animate from the given values to the element's current state
    From,
    /// Animate from the current state to the given values
    To,
}

impl TweenKind {
    pub fn method(self) -> &'static str {
        match self {
            TweenKind::From => "from",
            TweenKind::To => "to",
        }
    }
}

/// Motion profile for every particle in a host container.
///
/// `offsets[i]` is the x/y translation for the i-th particle.
#[derive(Debug)]
pub struct Tween<'a> {
    pub kind: TweenKind,
    pub profile: &'a TweenConfig,
    pub offsets: Vec<(f32, f32)>,
}

impl Tween<'_> {
    pub fn vars(&self) -> TweenVars<'_> {
        TweenVars::from(self.profile)
    }
}

fn is_false(b: &bool) -> bool { !*b }

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars<'a> {
    pub scale: f32,
    pub opacity: f32,
    pub duration: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f32>,
    pub ease: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i32>,
    #[serde(skip_serializing_if = "is_false")]
    pub yoyo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollLink<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ScrollLink<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub: Option<f32>,
}

impl<'a> From<&'a TweenConfig> for TweenVars<'a> {
    fn from(c: &'a TweenConfig) -> Self {
        let scroll_trigger = (c.start.is_some() || c.scrub.is_some()).then(|| ScrollLink {
            start: c.start.as_deref(),
            scrub: c.scrub,
        });

        Self {
            scale: c.scale,
            opacity: c.opacity,
            duration: c.duration,
            stagger: c.stagger,
            ease: &c.ease,
            repeat: c.repeat,
            yoyo: c.yoyo,
            scroll_trigger,
        }
    }
}

impl TweenVars<'_> {
    pub fn to_json(&self) -> Result<String, FxError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(c: &TweenConfig) -> Value {
        serde_json::from_str(&TweenVars::from(c).to_json().unwrap()).unwrap()
    }

    fn close(v: &Value, want: f64) -> bool {
        v.as_f64().is_some_and(|f| (f - want).abs() < 1e-6)
    }

    #[test]
    fn entrance_vars() {
        let v = parse(&TweenConfig::entrance(800.0, 3.5));
        assert!(close(&v["opacity"], 0.0));
        assert!(close(&v["scale"], 0.0));
        assert!(close(&v["duration"], 3.5));
        assert!(close(&v["stagger"], 0.05));
        assert_eq!(v["ease"], "power4.out");
        assert_eq!(v["scrollTrigger"]["start"], "top 90%");
        assert!(v["scrollTrigger"].get("scrub").is_none());
        assert!(v.get("repeat").is_none());
        assert!(v.get("yoyo").is_none());
    }

    #[test]
    fn drift_vars() {
        let v = parse(&TweenConfig::drift(1200.0, 1.5, 0.3, 7.0));
        assert_eq!(v["repeat"], -1);
        assert_eq!(v["yoyo"], true);
        assert_eq!(v["ease"], "sine.inOut");
        assert!(close(&v["scrollTrigger"]["scrub"], 1.0));
        assert!(v["scrollTrigger"].get("start").is_none());
        assert!(v.get("stagger").is_none());
    }

    #[test]
    fn no_scroll_trigger_without_link() {
        let v = parse(&TweenConfig::default());
        assert!(v.get("scrollTrigger").is_none());
    }

    #[test]
    fn kind_method_names() {
        assert_eq!(TweenKind::From.method(), "from");
        assert_eq!(TweenKind::To.method(), "to");
    }
}
