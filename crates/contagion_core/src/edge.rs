use crate::error::{check_dimension, ModelError};
use crate::traits::{OdeSystem, Scalar};

/// P(node 0 susceptible).
pub const S0: usize = 0;
/// P(node 1 susceptible).
pub const S1: usize = 1;
/// P(node 0 infected).
pub const I0: usize = 2;
/// P(node 1 infected).
pub const I1: usize = 3;
/// P(node 0 susceptible and node 1 infected).
pub const S0_I1: usize = 4;
/// P(node 0 infected and node 1 susceptible).
pub const I0_S1: usize = 5;

/// State dimension of [`EdgeEpidemic`].
pub const DIM: usize = 6;

/// Contagion on a two-node graph with a single edge, tracked through the
/// four node marginals and the two discordant joint probabilities.
///
/// Transmission (`beta`) acts only through the discordant joints; recovery
/// (`gamma`) drains infected mass. The pair is the whole graph, so the
/// representation is exact rather than a closure. The slot constants above
/// are the public layout contract: consumers address state by name, storage
/// stays a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeEpidemic<T: Scalar> {
    beta: T,
    gamma: T,
}

impl<T: Scalar> EdgeEpidemic<T> {
    pub fn new(beta: T, gamma: T) -> Self {
        Self { beta, gamma }
    }

    pub fn beta(&self) -> T {
        self.beta
    }

    pub fn gamma(&self) -> T {
        self.gamma
    }
}

impl<T: Scalar> OdeSystem<T> for EdgeEpidemic<T> {
    fn dimension(&self) -> usize {
        DIM
    }

    fn derivatives(&self, _t: T, y: &[T], ydot: &mut [T]) -> Result<(), ModelError> {
        check_dimension(DIM, y.len())?;
        check_dimension(DIM, ydot.len())?;

        let beta = self.beta;
        let gamma = self.gamma;

        ydot[S0] = -beta * y[S0_I1];
        ydot[S1] = -beta * y[I0_S1];
        ydot[I0] = gamma * y[S0_I1] - gamma * y[I0];
        ydot[I1] = gamma * y[I0_S1] - gamma * y[I1];
        ydot[S0_I1] = -beta * y[S0_I1] + gamma * y[I0_S1] - gamma * y[I1];
        ydot[I0_S1] = gamma * y[S0_I1] - gamma * y[I0] - beta * y[I0_S1];
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derivatives_match_hand_computed_reference() {
        // Node 0 infected, node 1 susceptible, all mass on the discordant
        // joint I0_S1.
        let system = EdgeEpidemic::new(0.8, 0.1);
        let y = [0.0, 1.0, 1.0, 0.0, 0.0, 1.0];
        let mut ydot = [0.0; DIM];
        system.derivatives(0.0, &y, &mut ydot).unwrap();

        let expected = [0.0, -0.8, -0.1, 0.1, 0.1, -0.9];
        for i in 0..DIM {
            assert_relative_eq!(ydot[i], expected[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn no_discordant_mass_freezes_susceptibles() {
        // Without discordant joints there is no transmission channel:
        // susceptible marginals hold still and infected marginals decay at
        // the recovery rate.
        let system = EdgeEpidemic::new(0.6, 0.25);
        let y = [0.3, 0.4, 0.7, 0.6, 0.0, 0.0];
        let mut ydot = [0.0; DIM];
        system.derivatives(0.0, &y, &mut ydot).unwrap();

        assert_eq!(ydot[S0], 0.0);
        assert_eq!(ydot[S1], 0.0);
        assert_eq!(ydot[I0], -0.25 * y[I0]);
        assert_eq!(ydot[I1], -0.25 * y[I1]);
    }

    #[test]
    fn wrong_length_buffers_are_rejected() {
        let system = EdgeEpidemic::new(0.8, 0.1);
        let mut ydot = [0.0; DIM];

        let err = system.derivatives(0.0, &[0.0; 5], &mut ydot).unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                expected: DIM,
                actual: 5
            }
        );

        let err = system
            .derivatives(0.0, &[0.0; DIM], &mut [0.0; 7])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                expected: DIM,
                actual: 7
            }
        );
    }
}
