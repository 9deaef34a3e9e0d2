use dioxus::prelude::*;

use super::CODE_LEN;

pub const DEFAULT_EVENT_TITLE: &str = "Onam Treasure Hunt";
pub const DEFAULT_TARGET_CODE: &str = "01964";

/// per-event values, injected into the game at initialization so a new event
/// only needs a rebuild with different env vars, not a code change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub event_title: String,
    pub target_code: String,
}

impl GameConfig {
    /// reads `VETTA_EVENT_TITLE` and `VETTA_TARGET_CODE` at compile time;
    /// there is no server to ask at runtime, so build-time env is the config seam
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("VETTA_EVENT_TITLE").unwrap_or(DEFAULT_EVENT_TITLE),
            option_env!("VETTA_TARGET_CODE").unwrap_or(DEFAULT_TARGET_CODE),
        )
    }

    /// a target override that isn't exactly 5 decimal digits would make the
    /// game unwinnable, so it is dropped in favor of the default
    pub fn new(event_title: &str, target_code: &str) -> Self {
        let target_code = if is_valid_code(target_code) {
            target_code.to_owned()
        } else {
            error!("target code override isn't {CODE_LEN} decimal digits, using the default");
            DEFAULT_TARGET_CODE.to_owned()
        };

        Self {
            event_title: event_title.to_owned(),
            target_code,
        }
    }
}

fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LEN && code.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_code_is_accepted() {
        let config = GameConfig::new("Vetta", DEFAULT_TARGET_CODE);
        assert_eq!(config.target_code, DEFAULT_TARGET_CODE);
        assert_eq!(config.event_title, "Vetta");
    }

    #[test]
    fn valid_override_is_kept() {
        let config = GameConfig::new("Vetta", "55555");
        assert_eq!(config.target_code, "55555");
    }

    /// too short, too long, non-digit and non-ascii overrides all fall back
    #[test]
    fn malformed_override_falls_back_to_default() {
        for bad in ["1234", "123456", "12a45", "", "൦൧൨൩൪"] {
            let config = GameConfig::new("Vetta", bad);
            assert_eq!(config.target_code, DEFAULT_TARGET_CODE, "override: {bad:?}");
        }
    }
}
