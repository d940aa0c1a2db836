//! Named host events and the vocabulary that maps them onto engine input.

use serde::{Deserialize, Serialize};
use tilt_engine::{Button, InputEvent};

/// Payload of a named host event.
#[derive(Debug, Clone)]
pub enum VrPayload {
    /// 16 floats in GL column order (a tracked pose).
    Transform16([f32; 16]),
    /// A single float (heartbeat elapsed seconds).
    Scalar(f32),
    Empty,
}

/// A named event as delivered by the VR host.
#[derive(Debug, Clone)]
pub struct VrEvent {
    pub name: String,
    pub payload: VrPayload,
}

impl VrEvent {
    pub fn transform(name: impl Into<String>, transform: [f32; 16]) -> Self {
        Self {
            name: name.into(),
            payload: VrPayload::Transform16(transform),
        }
    }

    pub fn scalar(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            payload: VrPayload::Scalar(value),
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: VrPayload::Empty,
        }
    }
}

/// The host's event-name vocabulary.
///
/// The core matches only this small fixed set; unknown names are ignored.
/// Button entries are base names — the host appends `_Down`/`_Up`.
/// Loadable from JSON so a rig swap is a config change, not a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventVocabulary {
    /// Substrings a wand-pose event name must all contain.
    #[serde(default = "default_wand_move")]
    pub wand_move_contains: Vec<String>,
    /// Heartbeat event name.
    #[serde(default = "default_frame_tick")]
    pub frame_tick: String,
    /// Quit event name.
    #[serde(default = "default_quit")]
    pub quit: String,
    /// Button gating board movement, if the rig has one.
    #[serde(default)]
    pub move_button: Option<String>,
    /// Button gating board tilt, if the rig has one.
    #[serde(default)]
    pub tilt_button: Option<String>,
    /// Button restarting the round.
    #[serde(default = "default_reset_button")]
    pub reset_button: Option<String>,
}

fn default_wand_move() -> Vec<String> {
    vec!["Wand".to_string(), "Move".to_string()]
}

fn default_frame_tick() -> String {
    "FrameStart".to_string()
}

fn default_quit() -> String {
    "KbdEsc_Down".to_string()
}

fn default_reset_button() -> Option<String> {
    Some("KbdSpace".to_string())
}

impl Default for EventVocabulary {
    fn default() -> Self {
        Self {
            wand_move_contains: default_wand_move(),
            frame_tick: default_frame_tick(),
            quit: default_quit(),
            move_button: None,
            tilt_button: None,
            reset_button: default_reset_button(),
        }
    }
}

impl EventVocabulary {
    /// Parse a vocabulary from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Map a named host event onto an engine input event.
    /// Returns None for names outside the vocabulary or events whose
    /// payload does not match their name.
    pub fn translate(&self, event: &VrEvent) -> Option<InputEvent> {
        if event.name == self.quit {
            return Some(InputEvent::Quit);
        }

        if event.name == self.frame_tick {
            if let VrPayload::Scalar(elapsed_seconds) = event.payload {
                return Some(InputEvent::FrameTick { elapsed_seconds });
            }
            log::warn!("heartbeat event {:?} without a scalar payload", event.name);
            return None;
        }

        if let Some(input) = self.match_button(&event.name) {
            return Some(input);
        }

        if self
            .wand_move_contains
            .iter()
            .all(|s| event.name.contains(s.as_str()))
        {
            if let VrPayload::Transform16(transform) = event.payload {
                return Some(InputEvent::WandMove { transform });
            }
            log::warn!("wand event {:?} without a transform payload", event.name);
            return None;
        }

        None
    }

    fn match_button(&self, name: &str) -> Option<InputEvent> {
        let table = [
            (&self.move_button, Button::Move),
            (&self.tilt_button, Button::Tilt),
            (&self.reset_button, Button::Reset),
        ];
        for (base, button) in table {
            let Some(base) = base else { continue };
            if let Some(suffix) = name.strip_prefix(base.as_str()) {
                match suffix {
                    "_Down" => return Some(InputEvent::ButtonDown { button }),
                    "_Up" => return Some(InputEvent::ButtonUp { button }),
                    _ => {}
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> [f32; 16] {
        let mut t = [0.0f32; 16];
        t[0] = 1.0;
        t[5] = 1.0;
        t[10] = 1.0;
        t[15] = 1.0;
        t
    }

    #[test]
    fn wand_move_matches_on_substrings() {
        let vocab = EventVocabulary::default();
        let event = VrEvent::transform("Wand0_Move", identity());
        match vocab.translate(&event) {
            Some(InputEvent::WandMove { transform }) => assert_eq!(transform[0], 1.0),
            other => panic!("unexpected translation: {other:?}"),
        }
    }

    #[test]
    fn wand_joystick_is_not_a_move() {
        let vocab = EventVocabulary::default();
        let event = VrEvent::transform("Wand0_Joystick", identity());
        assert!(vocab.translate(&event).is_none());
    }

    #[test]
    fn heartbeat_needs_scalar_payload() {
        let vocab = EventVocabulary::default();
        let good = VrEvent::scalar("FrameStart", 0.016);
        let bad = VrEvent::empty("FrameStart");
        assert!(matches!(
            vocab.translate(&good),
            Some(InputEvent::FrameTick { .. })
        ));
        assert!(vocab.translate(&bad).is_none());
    }

    #[test]
    fn quit_and_unknown_names() {
        let vocab = EventVocabulary::default();
        assert!(matches!(
            vocab.translate(&VrEvent::empty("KbdEsc_Down")),
            Some(InputEvent::Quit)
        ));
        assert!(vocab.translate(&VrEvent::empty("HeadTracker_Move2")).is_none());
    }

    #[test]
    fn reset_button_down_and_up() {
        let vocab = EventVocabulary::default();
        assert!(matches!(
            vocab.translate(&VrEvent::empty("KbdSpace_Down")),
            Some(InputEvent::ButtonDown { button: Button::Reset })
        ));
        assert!(matches!(
            vocab.translate(&VrEvent::empty("KbdSpace_Up")),
            Some(InputEvent::ButtonUp { button: Button::Reset })
        ));
    }

    #[test]
    fn vocabulary_parses_from_json() {
        let vocab = EventVocabulary::from_json(
            r#"{
                "wand_move_contains": ["Controller", "Pose"],
                "tilt_button": "Wand_Trigger"
            }"#,
        )
        .unwrap();
        assert_eq!(vocab.frame_tick, "FrameStart");
        let event = VrEvent::transform("LeftController_Pose", identity());
        assert!(matches!(
            vocab.translate(&event),
            Some(InputEvent::WandMove { .. })
        ));
        assert!(matches!(
            vocab.translate(&VrEvent::empty("Wand_Trigger_Down")),
            Some(InputEvent::ButtonDown { button: Button::Tilt })
        ));
    }
}
