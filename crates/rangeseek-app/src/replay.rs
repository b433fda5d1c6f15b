//! Scripted pointer-session replay.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use kurbo::Size;
use rangeseek_core::{ConfigError, PointerEvent, RangeSeekBar, RangeSeekConfig, Selection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid widget size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// A pointer session to replay against a fresh widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Widget configuration; defaults apply to missing fields.
    #[serde(default)]
    pub config: RangeSeekConfig,
    /// Widget width.
    pub width: f64,
    /// Widget height.
    pub height: f64,
    /// Events in delivery order, in widget-local coordinates.
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Selection width reported by each slide callback.
    pub slides: Vec<f64>,
    /// Number of events the widget consumed.
    pub consumed: usize,
    /// Left fraction after the last event.
    pub left: f64,
    /// Right fraction after the last event.
    pub right: f64,
}

impl ReplayReport {
    /// Final selection.
    pub fn selection(&self) -> Selection {
        Selection {
            left: self.left,
            right: self.right,
        }
    }
}

/// Replay a script and collect the widget's reports.
pub fn replay(script: &ReplayScript) -> Result<ReplayReport, ReplayError> {
    script.config.validate()?;
    let (width, height) = (script.width, script.height);
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(ReplayError::InvalidSize { width, height });
    }

    let mut bar = RangeSeekBar::with_chevrons(script.config.clone());
    let slides = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&slides);
    bar.set_on_slide(move |w| sink.borrow_mut().push(w));
    bar.set_size(Size::new(width, height));

    let mut consumed = 0;
    for event in &script.events {
        if bar.handle_pointer_event(*event).is_consumed() {
            consumed += 1;
        }
    }
    log::info!("Replayed {} events ({} consumed)", script.events.len(), consumed);

    let selection = bar.selection();
    bar.clear_on_slide();
    let slides = slides.borrow().clone();
    Ok(ReplayReport {
        slides,
        consumed,
        left: selection.left,
        right: selection.right,
    })
}

/// Load a JSON script from disk and replay it.
///
/// `config_override`, when given, replaces the script's own configuration.
pub fn replay_file(path: impl AsRef<Path>, config_override: Option<RangeSeekConfig>) -> Result<ReplayReport, ReplayError> {
    let path = path.as_ref();
    log::debug!("Loading replay script {}", path.display());
    let json = std::fs::read_to_string(path)?;
    let mut script: ReplayScript = serde_json::from_str(&json)?;
    if let Some(config) = config_override {
        script.config = config;
    }
    replay(&script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeseek_core::BoundsPolicy;
    use std::io::Write;

    const SCRIPT: &str = r#"{
        "width": 300,
        "height": 100,
        "events": [
            {"kind": "down", "x": 20, "y": 50},
            {"kind": "move", "x": 35, "y": 50},
            {"kind": "move", "x": 50, "y": 50},
            {"kind": "up", "x": 50, "y": 50}
        ]
    }"#;

    #[test]
    fn test_replay_drag_left_thumb() {
        let script: ReplayScript = serde_json::from_str(SCRIPT).unwrap();
        let report = replay(&script).unwrap();

        assert_eq!(report.consumed, 4);
        assert_eq!(report.slides.len(), 2);
        assert!((report.slides[1] - 0.60).abs() < 1e-9);
        assert!((report.left - 0.25).abs() < 1e-9);
        assert!((report.right - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_script_flat_events() {
        let script: ReplayScript =
            serde_json::from_str(r#"{"width":300,"height":100,"events":[{"kind":"down","x":20,"y":50}]}"#)
                .unwrap();
        assert!(script.config == RangeSeekConfig::default());
        assert_eq!(script.events, vec![PointerEvent::down(20.0, 50.0)]);
        assert_eq!(replay(&script).unwrap().consumed, 1);
    }

    #[test]
    fn test_missed_down_consumes_nothing() {
        let script = ReplayScript {
            config: RangeSeekConfig::default(),
            width: 300.0,
            height: 100.0,
            events: vec![
                PointerEvent::down(150.0, 50.0),
                PointerEvent::moved(200.0, 50.0),
                PointerEvent::up(200.0, 50.0),
            ],
        };
        let report = replay(&script).unwrap();
        assert_eq!(report.consumed, 0);
        assert!(report.slides.is_empty());
        assert!((report.selection().width() - 0.70).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_size() {
        let script = ReplayScript {
            config: RangeSeekConfig::default(),
            width: 0.0,
            height: 100.0,
            events: Vec::new(),
        };
        assert!(matches!(replay(&script), Err(ReplayError::InvalidSize { .. })));
    }

    #[test]
    fn test_invalid_config() {
        let script = ReplayScript {
            config: RangeSeekConfig::default().with_thumb_width(f64::NAN),
            width: 300.0,
            height: 100.0,
            events: Vec::new(),
        };
        assert!(matches!(replay(&script), Err(ReplayError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_replay_file_with_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"width": 300, "height": 100, "events": [
                {{"kind": "down", "x": 10, "y": 10}},
                {{"kind": "move", "x": 400, "y": 10}}
            ]}}"#
        )
        .unwrap();

        let clamped = replay_file(file.path(), None).unwrap();
        assert!(clamped.selection().width().abs() < 1e-9);

        let free = RangeSeekConfig::default().with_bounds_policy(BoundsPolicy::Unclamped);
        let unclamped = replay_file(file.path(), Some(free)).unwrap();
        assert!(unclamped.selection().width() < 0.0);
    }

    #[test]
    fn test_replay_file_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a script").unwrap();
        assert!(matches!(replay_file(file.path(), None), Err(ReplayError::Script(_))));
    }
}
