//! Evaluation weights
//!
//! The static evaluation is a weighted sum of three differentials: corner
//! ownership, mobility and material.

/// Tunable weights for `evaluate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Points per corner held (negative for the opponent's corners)
    pub corner: i32,
    /// Points per legal move of advantage
    pub mobility: i32,
    /// Points per stone of advantage
    pub material: i32,
}

impl EvalWeights {
    pub const CORNER: i32 = 25;
    pub const MOBILITY: i32 = 5;
    pub const MATERIAL: i32 = 1;
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            corner: Self::CORNER,
            mobility: Self::MOBILITY,
            material: Self::MATERIAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = EvalWeights::default();
        assert_eq!((w.corner, w.mobility, w.material), (25, 5, 1));
    }

    #[test]
    fn test_weight_hierarchy() {
        // A corner outweighs a handful of extra moves, which outweigh a stone
        let w = EvalWeights::default();
        assert!(w.corner > w.mobility);
        assert!(w.mobility > w.material);
    }
}
