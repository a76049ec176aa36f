use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::session::Phase;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("missing element #{0}")]
    MissingElement(&'static str),

    #[error("2d context unavailable on #{0}")]
    NoContext(&'static str),

    #[error("js: {0}")]
    Js(String),

    #[error("no levels defined")]
    NoLevels,

    #[error("level {index} out of range ({count} levels)")]
    LevelOutOfRange { index: usize, count: usize },

    #[error("cannot {action} while {phase}")]
    InvalidTransition { phase: Phase, action: &'static str },
}

pub(crate) fn js_value_to_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(js_value_to_string(&value))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::MissingElement("start-btn").to_string(),
            "missing element #start-btn"
        );
        assert_eq!(
            GameError::LevelOutOfRange { index: 5, count: 2 }.to_string(),
            "level 5 out of range (2 levels)"
        );
        assert_eq!(
            GameError::InvalidTransition {
                phase: Phase::Running,
                action: "start",
            }
            .to_string(),
            "cannot start while running"
        );
    }
}
