use serde::{Deserialize, Serialize};

use crate::circle;

/// The models this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    Circle,
    Edge,
    Triangle,
}

/// Static capability description of one model.
///
/// Integrator adapters consult this at composition time; a model either
/// carries the sensitivity capability or it does not, and nothing is probed
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelSpec {
    pub kind: ModelKind,
    pub dimension: usize,
    /// Whether the model provides analytic state and parameter Jacobians.
    pub sensitivity: bool,
    /// Names accepted by `parameter_jacobian`, in registry order. Empty for
    /// evaluation-only models.
    pub parameters: &'static [&'static str],
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Circle, ModelKind::Edge, ModelKind::Triangle];

    pub fn spec(self) -> ModelSpec {
        match self {
            ModelKind::Circle => ModelSpec {
                kind: self,
                dimension: 2,
                sensitivity: true,
                parameters: circle::PARAMETERS,
            },
            ModelKind::Edge => ModelSpec {
                kind: self,
                dimension: crate::edge::DIM,
                sensitivity: false,
                parameters: &[],
            },
            ModelKind::Triangle => ModelSpec {
                kind: self,
                dimension: crate::triangle::DIM,
                sensitivity: false,
                parameters: &[],
            },
        }
    }
}
