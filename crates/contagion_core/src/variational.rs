use anyhow::{bail, Context, Result};
use nalgebra::{DMatrix, DVector};

use crate::error::{check_dimension, ModelError};
use crate::traits::{OdeSystem, SensitivityOde};

/// A model joined with its linear variational equations, presented to the
/// integrator as one first-order system.
///
/// Augmented state layout: the primary state (`n` slots), then the
/// state-transition matrix `Φ` row-major (`n * n` slots), then one
/// length-`n` sensitivity column per selected parameter. Starting from
/// [`initial_state`](Self::initial_state), integration carries
/// `Φ(t) = ∂y(t)/∂y(t0)` and each parameter column `∂y(t)/∂p` alongside the
/// trajectory.
///
/// This type only composes derivatives; stepping, error control, and dense
/// output remain the integrator's job.
#[derive(Debug)]
pub struct VariationalSystem<S> {
    inner: S,
    parameters: Vec<&'static str>,
}

impl<S: SensitivityOde<f64>> VariationalSystem<S> {
    /// Wraps `inner`, selecting the parameters to carry sensitivities for.
    ///
    /// Any subset of the model's registry may be selected, in any order.
    /// Unknown or duplicated names fail here, at composition time, rather
    /// than mid-integration.
    pub fn new(inner: S, parameters: &[&str]) -> Result<Self> {
        let mut selected: Vec<&'static str> = Vec::with_capacity(parameters.len());
        for &name in parameters {
            let canonical = inner
                .parameter_names()
                .iter()
                .copied()
                .find(|&p| p == name)
                .with_context(|| format!("model does not recognize parameter `{name}`"))?;
            if selected.contains(&canonical) {
                bail!("parameter `{name}` selected more than once");
            }
            selected.push(canonical);
        }
        Ok(Self {
            inner,
            parameters: selected,
        })
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Selected parameter names, in column order.
    pub fn parameters(&self) -> &[&'static str] {
        &self.parameters
    }

    fn primary_dimension(&self) -> usize {
        self.inner.dimension()
    }

    /// Augmented initial condition: `y0`, `Φ = I`, zero parameter columns.
    pub fn initial_state(&self, y0: &[f64]) -> Result<Vec<f64>, ModelError> {
        let n = self.primary_dimension();
        check_dimension(n, y0.len())?;
        let mut state = vec![0.0; self.dimension()];
        state[..n].copy_from_slice(y0);
        for i in 0..n {
            state[n + i * n + i] = 1.0;
        }
        Ok(state)
    }

    /// Primary-state block of an augmented state.
    pub fn primary<'a>(&self, state: &'a [f64]) -> &'a [f64] {
        &state[..self.primary_dimension()]
    }

    /// State-transition block `Φ` of an augmented state.
    pub fn state_transition(&self, state: &[f64]) -> DMatrix<f64> {
        let n = self.primary_dimension();
        DMatrix::from_row_slice(n, n, &state[n..n + n * n])
    }

    /// Sensitivity column for `name` in an augmented state.
    pub fn parameter_sensitivity(&self, state: &[f64], name: &str) -> Result<Vec<f64>, ModelError> {
        let n = self.primary_dimension();
        let column = self
            .parameters
            .iter()
            .position(|&p| p == name)
            .ok_or_else(|| ModelError::UnrecognizedParameter {
                name: name.to_string(),
            })?;
        let offset = n + n * n + column * n;
        Ok(state[offset..offset + n].to_vec())
    }
}

impl<S: SensitivityOde<f64>> OdeSystem<f64> for VariationalSystem<S> {
    fn dimension(&self) -> usize {
        let n = self.inner.dimension();
        n + n * n + n * self.parameters.len()
    }

    fn derivatives(&self, t: f64, y: &[f64], ydot: &mut [f64]) -> Result<(), ModelError> {
        let dim = self.dimension();
        check_dimension(dim, y.len())?;
        check_dimension(dim, ydot.len())?;

        let n = self.inner.dimension();

        self.inner.derivatives(t, &y[..n], &mut ydot[..n])?;

        // One state-Jacobian evaluation serves Φ and every parameter column;
        // the cache it returns is pinned to this (t, y).
        let mut dfdy = vec![0.0; n * n];
        let cache = self.inner.state_jacobian(t, &y[..n], &mut dfdy)?;
        let jacobian = DMatrix::from_row_slice(n, n, &dfdy);

        // Φ' = J Φ
        let phi = DMatrix::from_row_slice(n, n, &y[n..n + n * n]);
        let phi_dot = &jacobian * phi;
        for i in 0..n {
            for j in 0..n {
                ydot[n + i * n + j] = phi_dot[(i, j)];
            }
        }

        // s_p' = J s_p + ∂f/∂p
        let mut dfdp = vec![0.0; n];
        for (k, name) in self.parameters.iter().enumerate() {
            self.inner.parameter_jacobian(&cache, name, &mut dfdp)?;
            let offset = n + n * n + k * n;
            let column = DVector::from_column_slice(&y[offset..offset + n]);
            let column_dot = &jacobian * column;
            for i in 0..n {
                ydot[offset + i] = column_dot[i] + dfdp[i];
            }
        }

        Ok(())
    }
}
