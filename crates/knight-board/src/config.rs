/// Configuration for creating a [`BoardModel`](crate::BoardModel) and its
/// terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Side length of the board. Must be at least 1.
    pub size: i32,
    /// Whether mouse clicks select cells.
    pub mouse: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 8,
            mouse: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_chess_board() {
        let c = BoardConfig::default();
        assert_eq!(c.size, 8);
        assert!(c.mouse);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let c: BoardConfig = serde_json::from_str(r#"{"size": 12}"#).unwrap();
        assert_eq!(
            c,
            BoardConfig {
                size: 12,
                mouse: true
            }
        );
    }
}
