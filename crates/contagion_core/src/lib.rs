//! Moment-closure epidemic models over small contact graphs, plus a
//! circular-motion model carrying an analytic local-sensitivity extension.
//! The crate supplies derivative and Jacobian evaluators for an external
//! adaptive integrator to drive; it performs no integration itself.
//!
//! Key components:
//! - **Traits**: [`traits::OdeSystem`] (dimension + derivatives),
//!   [`traits::SensitivityOde`] (state/parameter Jacobians with an explicit
//!   evaluation cache), [`traits::Steppable`] (the integrator-side contract).
//! - **Models**: [`circle::CircleSystem`], [`edge::EdgeEpidemic`],
//!   [`triangle::TriangleEpidemic`].
//! - **Registry**: [`registry::ModelKind`] capability descriptions for
//!   composition-time checks.
//! - **Variational**: [`variational::VariationalSystem`], the augmented
//!   system joining a model with its sensitivity equations.

pub mod circle;
pub mod edge;
pub mod error;
pub mod registry;
pub mod traits;
pub mod triangle;
pub mod variational;
