use crate::error::{check_dimension, ModelError};
use crate::traits::{OdeSystem, Scalar};

// Singles.
pub const S0: usize = 0;
pub const S1: usize = 1;
pub const S2: usize = 2;
pub const I0: usize = 3;
pub const I1: usize = 4;
pub const I2: usize = 5;
// Discordant pairs.
pub const S0_I1: usize = 6;
pub const I0_S1: usize = 7;
pub const S0_I2: usize = 8;
pub const I0_S2: usize = 9;
pub const S1_I2: usize = 10;
pub const I1_S2: usize = 11;
// Triples.
pub const S0_S1_I2: usize = 12;
pub const S0_I1_S2: usize = 13;
pub const S0_I1_I2: usize = 14;
pub const I0_S1_S2: usize = 15;
pub const I0_I1_S2: usize = 16;
pub const I0_S1_I2: usize = 17;

/// State dimension of [`TriangleEpidemic`].
pub const DIM: usize = 18;

/// Contagion on a fully-connected three-node graph, tracked exactly through
/// singles, discordant pairs, and triples (six of each).
///
/// Each single couples to its incident discordant pairs, each pair decays at
/// `beta + gamma` and exchanges mass with the triples extending it, and each
/// triple decays at `2*beta + gamma`, two of them with feed-in from sibling
/// triples. The coefficient table is the model's contract; the slot
/// constants above fix the layout.
///
/// Inputs are not validated against the probability manifold: states outside
/// `[0, 1]` or with inconsistent marginals still evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleEpidemic<T: Scalar> {
    beta: T,
    gamma: T,
}

impl<T: Scalar> TriangleEpidemic<T> {
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

impl<T: Scalar> OdeSystem<T> for TriangleEpidemic<T> {
    fn dimension(&self) -> usize {
        DIM
    }

    fn derivatives(&self, _t: T, y: &[T], ydot: &mut [T]) -> Result<(), ModelError> {
        check_dimension(DIM, y.len())?;
        check_dimension(DIM, ydot.len())?;

        let beta = self.beta;
        let gamma = self.gamma;
        let pair_decay = beta + gamma;
        let triple_decay = beta + beta + gamma;

        // Singles: drained (S) or fed (I) by the incident discordant pairs,
        // infected mass recovering at gamma.
        ydot[S0] = -beta * y[S0_I1] - beta * y[S0_I2];
        ydot[S1] = -beta * y[I0_S1] - beta * y[S1_I2];
        ydot[S2] = -beta * y[I1_S2] - beta * y[I0_S2];

        ydot[I0] = beta * y[S0_I1] + beta * y[S0_I2] - gamma * y[I0];
        ydot[I1] = beta * y[I0_S1] + beta * y[S1_I2] - gamma * y[I1];
        ydot[I2] = beta * y[I1_S2] + beta * y[I0_S2] - gamma * y[I2];

        // Pairs: exchange mass with the triples extending them through the
        // third node.
        ydot[S0_I1] = -pair_decay * y[S0_I1] + beta * y[S0_S1_I2] - beta * y[S0_I1_I2];
        ydot[S0_I2] = -pair_decay * y[S0_I2] - beta * y[S0_I1_I2] + beta * y[S0_I1_S2];
        ydot[S1_I2] = -pair_decay * y[S1_I2] - beta * y[I0_S1_I2] + beta * y[I0_S1_S2];

        ydot[I0_S1] = -pair_decay * y[I0_S1] - beta * y[I0_S1_I2] + beta * y[S0_S1_I2];
        ydot[I0_S2] = -pair_decay * y[I0_S2] - beta * y[I0_I1_S2] + beta * y[S0_I1_S2];
        ydot[I1_S2] = -pair_decay * y[I1_S2] + beta * y[I0_S1_S2] - beta * y[I0_I1_S2];

        // Triples: homogeneous decay; the two doubly-infected triples also
        // collect mass from their singly-infected siblings.
        ydot[S0_S1_I2] = -triple_decay * y[S0_S1_I2];
        ydot[S0_I1_S2] = -triple_decay * y[S0_I1_S2];
        ydot[S0_I1_I2] = -triple_decay * y[S0_I1_I2] + beta * y[S0_S1_I2] + beta * y[S0_I1_S2];

        ydot[I0_S1_S2] = -triple_decay * y[I0_S1_S2];
        ydot[I0_S1_I2] = -triple_decay * y[I0_S1_I2] + beta * y[I0_S1_S2] + beta * y[S0_S1_I2];
        ydot[I0_I1_S2] = -triple_decay * y[I0_I1_S2] + beta * y[I0_S1_S2] + beta * y[S0_I1_S2];
        Ok(())
    }
}
