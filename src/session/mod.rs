//! Converter session
//!
//! Holds the (input, from, to) triple as an immutable state value and
//! recomputes factor and result through a pure reducer.

use serde::{Deserialize, Serialize};

use crate::convert::{compute_result, resolve_factor, Unit};

/// A user interaction with the converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    TextChanged { text: String },
    FromUnitSelected { unit: Unit },
    ToUnitSelected { unit: Unit },
}

/// The transient state of one converter session
///
/// Created fresh per session and discarded when the session ends; nothing is
/// persisted across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Raw value text as entered
    pub input: String,
    pub from: Unit,
    pub to: Unit,
    /// Multiplier last resolved for (from, to)
    pub factor: f64,
    pub result: f64,
}

impl Default for SessionState {
    fn default() -> Self {
        // The factor stays at 1.0 until the first event resolves it, even
        // though the initial pair is Kg/Lb.
        Self {
            input: String::new(),
            from: Unit::Kg,
            to: Unit::Lb,
            factor: 1.0,
            result: 0.0,
        }
    }
}

/// Apply one event to the session, producing the next state.
///
/// The changed field is updated first, then the factor is re-resolved for the
/// current pair, then the result is recomputed from input and factor.
pub fn reduce(state: &SessionState, event: Event) -> SessionState {
    let mut next = state.clone();

    match event {
        Event::TextChanged { text } => next.input = text,
        Event::FromUnitSelected { unit } => next.from = unit,
        Event::ToUnitSelected { unit } => next.to = unit,
    }

    next.factor = resolve_factor(next.from, next.to);
    if next.from.category() != next.to.category() {
        tracing::warn!(
            "Cross-category pair {} -> {}: no tabulated factor, using 1.0",
            next.from,
            next.to
        );
    }
    next.result = compute_result(&next.input, next.factor);

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = SessionState::default();
        assert_eq!(state.input, "");
        assert_eq!(state.from, Unit::Kg);
        assert_eq!(state.to, Unit::Lb);
        assert_eq!(state.factor, 1.0);
        assert_eq!(state.result, 0.0);
    }

    #[test]
    fn test_kg_to_lb_scenario() {
        // "10" with Kg -> Lb gives 22.0462
        let state = reduce(
            &SessionState::default(),
            Event::TextChanged {
                text: "10".to_string(),
            },
        );
        assert_eq!(state.factor, 2.20462);
        assert!((state.result - 22.0462).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_scenario() {
        // "" with Meters -> Feet gives 0.0
        let mut state = reduce(
            &SessionState::default(),
            Event::FromUnitSelected { unit: Unit::Meters },
        );
        state = reduce(&state, Event::ToUnitSelected { unit: Unit::Feet });
        assert_eq!(state.factor, 3.28084);
        assert_eq!(state.result, 0.0);
    }

    #[test]
    fn test_cross_category_scenario() {
        // "5" with Meters -> Kg falls back to factor 1.0
        let mut state = reduce(
            &SessionState::default(),
            Event::TextChanged {
                text: "5".to_string(),
            },
        );
        state = reduce(&state, Event::FromUnitSelected { unit: Unit::Meters });
        state = reduce(&state, Event::ToUnitSelected { unit: Unit::Kg });
        assert_eq!(state.factor, 1.0);
        assert_eq!(state.result, 5.0);
    }

    #[test]
    fn test_selection_recomputes_result() {
        let mut state = reduce(
            &SessionState::default(),
            Event::TextChanged {
                text: "100".to_string(),
            },
        );
        state = reduce(
            &state,
            Event::FromUnitSelected {
                unit: Unit::Centimeters,
            },
        );
        state = reduce(&state, Event::ToUnitSelected { unit: Unit::Meters });
        assert!((state.result - 1.0).abs() < 1e-9);

        // Switching the target alone is enough to recompute
        state = reduce(
            &state,
            Event::ToUnitSelected {
                unit: Unit::Millimeters,
            },
        );
        assert!((state.result - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_reduce_is_pure() {
        let initial = SessionState::default();
        let _ = reduce(
            &initial,
            Event::TextChanged {
                text: "42".to_string(),
            },
        );
        assert_eq!(initial, SessionState::default());
    }

    #[test]
    fn test_non_numeric_text_gives_zero() {
        let mut state = reduce(
            &SessionState::default(),
            Event::TextChanged {
                text: "12kg".to_string(),
            },
        );
        assert_eq!(state.result, 0.0);

        // Recovers once the text parses again
        state = reduce(
            &state,
            Event::TextChanged {
                text: "12".to_string(),
            },
        );
        assert!((state.result - 12.0 * 2.20462).abs() < 1e-9);
    }
}
