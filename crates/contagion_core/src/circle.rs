use crate::error::{check_dimension, ModelError};
use crate::traits::{OdeSystem, Scalar, SensitivityOde};

/// Name of the center x-coordinate parameter.
pub const CENTER_X: &str = "cx";
/// Name of the center y-coordinate parameter.
pub const CENTER_Y: &str = "cy";
/// Name of the angular-rate parameter.
pub const OMEGA: &str = "omega";

/// Recognized sensitivity parameters, in registry order.
pub const PARAMETERS: &[&str] = &[CENTER_X, CENTER_Y, OMEGA];

/// A point orbiting a fixed center `c` at constant angular rate `omega`:
///
/// ```text
/// y0' = omega * (c1 - y1)
/// y1' = omega * (y0 - c0)
/// ```
///
/// The exact solution moves along the circle of radius `|y(t0) - c|` around
/// `c`. Linear in state, so the state Jacobian is constant; the `omega`
/// partial is the only parameter partial that depends on `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSystem<T: Scalar> {
    center: [T; 2],
    omega: T,
}

impl<T: Scalar> CircleSystem<T> {
    pub fn new(center: [T; 2], omega: T) -> Self {
        Self { center, omega }
    }

    pub fn center(&self) -> [T; 2] {
        self.center
    }

    pub fn omega(&self) -> T {
        self.omega
    }
}

impl<T: Scalar> OdeSystem<T> for CircleSystem<T> {
    fn dimension(&self) -> usize {
        2
    }

    fn derivatives(&self, _t: T, y: &[T], ydot: &mut [T]) -> Result<(), ModelError> {
        check_dimension(2, y.len())?;
        check_dimension(2, ydot.len())?;

        ydot[0] = self.omega * (self.center[1] - y[1]);
        ydot[1] = self.omega * (y[0] - self.center[0]);
        Ok(())
    }
}

/// Parameter partials of a [`CircleSystem`] at one `(t, y)`, produced by
/// [`SensitivityOde::state_jacobian`]. Rows follow [`PARAMETERS`] order.
#[derive(Debug, Clone, Copy)]
pub struct CirclePartials<T> {
    dfdp: [[T; 2]; 3],
}

impl<T: Scalar> SensitivityOde<T> for CircleSystem<T> {
    type Cache = CirclePartials<T>;

    fn parameter_names(&self) -> &'static [&'static str] {
        PARAMETERS
    }

    fn state_jacobian(&self, _t: T, y: &[T], dfdy: &mut [T]) -> Result<Self::Cache, ModelError> {
        check_dimension(2, y.len())?;
        check_dimension(4, dfdy.len())?;

        let zero = T::zero();

        // Linear in state: dF/dy is the rotation generator, independent of
        // (t, y).
        dfdy[0] = zero;
        dfdy[1] = -self.omega;
        dfdy[2] = self.omega;
        dfdy[3] = zero;

        // The omega partial depends on y; all three partials are evaluated
        // here so the returned cache is complete for this (t, y).
        Ok(CirclePartials {
            dfdp: [
                [zero, -self.omega],
                [self.omega, zero],
                [self.center[1] - y[1], y[0] - self.center[0]],
            ],
        })
    }

    fn parameter_jacobian(
        &self,
        cache: &Self::Cache,
        name: &str,
        dfdp: &mut [T],
    ) -> Result<(), ModelError> {
        check_dimension(2, dfdp.len())?;
        let row = PARAMETERS
            .iter()
            .position(|&p| p == name)
            .ok_or_else(|| ModelError::UnrecognizedParameter {
                name: name.to_string(),
            })?;
        dfdp.copy_from_slice(&cache.dfdp[row]);
        Ok(())
    }
}
