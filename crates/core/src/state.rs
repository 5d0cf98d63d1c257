/// Keyed current-value lookup provided by the host environment.
///
/// The host owns a namespace of named state sources; the card only ever reads
/// them through this trait. `None` means the key is unknown to the host.
pub trait StateSource {
    /// Latest known raw state for `entity_id`, or `None` when absent.
    fn current_value(&self, entity_id: &str) -> Option<String>;
}

/// Sentinel states a host reports for a source that exists but currently has
/// no usable reading.
const ABSENT_STATES: &[&str] = &["unknown", "unavailable", "None"];

/// Interpret a raw state string as a finite number.
///
/// Absent keys, sentinel states and anything that fails to parse all collapse
/// to `None` — the presentation layer renders those as a placeholder rather
/// than an error.
pub fn numeric_state(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    if ABSENT_STATES.contains(&raw) {
        return None;
    }
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(numeric_state(Some("72")), Some(72.0));
        assert_eq!(numeric_state(Some("36.7")), Some(36.7));
    }

    #[test]
    fn absent_key_is_none() {
        assert_eq!(numeric_state(None), None);
    }

    #[test]
    fn sentinel_states_are_none() {
        assert_eq!(numeric_state(Some("unknown")), None);
        assert_eq!(numeric_state(Some("unavailable")), None);
        assert_eq!(numeric_state(Some("None")), None);
    }

    #[test]
    fn garbage_and_non_finite_are_none() {
        assert_eq!(numeric_state(Some("--")), None);
        assert_eq!(numeric_state(Some("NaN")), None);
    }
}
