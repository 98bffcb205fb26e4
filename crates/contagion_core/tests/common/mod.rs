use contagion_core::error::ModelError;
use contagion_core::traits::{OdeSystem, Scalar, Steppable};

/// Classic fixed-step fourth-order Runge-Kutta.
///
/// Enough integrator to exercise the evaluation contract in tests; the
/// adaptive machinery the crate targets lives elsewhere.
pub struct Rk4<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
    k3: Vec<T>,
    k4: Vec<T>,
    tmp: Vec<T>,
}

impl<T: Scalar> Rk4<T> {
    pub fn new(dim: usize) -> Self {
        let zero = T::zero();
        Self {
            k1: vec![zero; dim],
            k2: vec![zero; dim],
            k3: vec![zero; dim],
            k4: vec![zero; dim],
            tmp: vec![zero; dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for Rk4<T> {
    fn step(
        &mut self,
        system: &impl OdeSystem<T>,
        t: &mut T,
        y: &mut [T],
        dt: T,
    ) -> Result<(), ModelError> {
        let half = T::from_f64(0.5).unwrap();
        let sixth = T::from_f64(1.0 / 6.0).unwrap();
        let two = T::from_f64(2.0).unwrap();

        let t0 = *t;

        system.derivatives(t0, y, &mut self.k1)?;

        for i in 0..y.len() {
            self.tmp[i] = y[i] + dt * half * self.k1[i];
        }
        system.derivatives(t0 + dt * half, &self.tmp, &mut self.k2)?;

        for i in 0..y.len() {
            self.tmp[i] = y[i] + dt * half * self.k2[i];
        }
        system.derivatives(t0 + dt * half, &self.tmp, &mut self.k3)?;

        for i in 0..y.len() {
            self.tmp[i] = y[i] + dt * self.k3[i];
        }
        system.derivatives(t0 + dt, &self.tmp, &mut self.k4)?;

        for i in 0..y.len() {
            y[i] = y[i]
                + dt * sixth * (self.k1[i] + two * self.k2[i] + two * self.k3[i] + self.k4[i]);
        }

        *t = t0 + dt;
        Ok(())
    }
}

/// Advances `(t, y)` through `steps` fixed steps of size `dt`.
pub fn integrate<T: Scalar>(
    system: &impl OdeSystem<T>,
    t: &mut T,
    y: &mut [T],
    dt: T,
    steps: usize,
) -> Result<(), ModelError> {
    let mut stepper = Rk4::new(y.len());
    for _ in 0..steps {
        stepper.step(system, t, y, dt)?;
    }
    Ok(())
}
