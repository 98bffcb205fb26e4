use crate::error::ModelError;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types usable as scalars in the model equations.
/// Must support floating-point arithmetic, debug printing, and conversion
/// from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// An explicit first-order ODE system `y' = f(t, y)`, driven by an external
/// integrator.
pub trait OdeSystem<T: Scalar> {
    /// Returns the dimension of the state space. Fixed for the lifetime of
    /// the instance.
    fn dimension(&self) -> usize;

    /// Evaluates the right-hand side at `(t, y)` into the caller-supplied
    /// buffer `ydot`.
    ///
    /// Both slices must have length [`dimension`](Self::dimension); the call
    /// fails with [`ModelError::DimensionMismatch`] before writing anything
    /// otherwise. Non-finite inputs are not rejected.
    fn derivatives(&self, t: T, y: &[T], ydot: &mut [T]) -> Result<(), ModelError>;
}

/// Analytic local-sensitivity extension of an [`OdeSystem`].
///
/// [`state_jacobian`](Self::state_jacobian) fills the Jacobian of the
/// right-hand side with respect to state and returns a [`Cache`](Self::Cache)
/// of the parameter partials at the same `(t, y)`;
/// [`parameter_jacobian`](Self::parameter_jacobian) reads that cache. A cache
/// can only be obtained for the `(t, y)` it was computed at, so the
/// state-Jacobian-before-parameter-Jacobian ordering holds by construction.
/// Discard the cache once the integrator moves to a new `(t, y)`.
pub trait SensitivityOde<T: Scalar>: OdeSystem<T> {
    /// Parameter partials evaluated by one
    /// [`state_jacobian`](Self::state_jacobian) call.
    type Cache;

    /// Recognized parameter names, in a fixed order.
    fn parameter_names(&self) -> &'static [&'static str];

    /// Whether `name` may be passed to
    /// [`parameter_jacobian`](Self::parameter_jacobian).
    fn is_recognized(&self, name: &str) -> bool {
        self.parameter_names().iter().any(|&p| p == name)
    }

    /// Fills `dfdy` with the state Jacobian at `(t, y)`, row-major:
    /// `dfdy[i * n + j] = ∂ydot_i/∂y_j`, buffer length `n * n`. Returns the
    /// parameter partials evaluated at the same point.
    fn state_jacobian(&self, t: T, y: &[T], dfdy: &mut [T]) -> Result<Self::Cache, ModelError>;

    /// Fills `dfdp` (length `n`) with `∂ydot_i/∂name` read from `cache`.
    ///
    /// Fails with [`ModelError::UnrecognizedParameter`] for any name outside
    /// [`parameter_names`](Self::parameter_names).
    fn parameter_jacobian(
        &self,
        cache: &Self::Cache,
        name: &str,
        dfdp: &mut [T],
    ) -> Result<(), ModelError>;
}

/// An integrator able to advance an [`OdeSystem`] by one step.
///
/// Implementations live outside this crate; the trait pins the calling
/// convention they follow. The integrator owns the state vector and the
/// stepping policy, the model owns nothing but its parameters.
pub trait Steppable<T: Scalar> {
    /// Advances `(t, y)` in place by one step of size `dt`.
    fn step(
        &mut self,
        system: &impl OdeSystem<T>,
        t: &mut T,
        y: &mut [T],
        dt: T,
    ) -> Result<(), ModelError>;
}
