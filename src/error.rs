//! Errors raised while setting up a simulation.
//!
//! Stepping never fails; only building a world or registering couplings does.

use thiserror::Error;

use crate::properties::BodyHandle;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A configuration value the solver cannot run with.
    #[error("Invalid simulation config: {0}")]
    InvalidConfig(String),

    /// A constraint or spring refers to a body that is not in the world.
    #[error("Body {0:?} does not exist in this world")]
    UnknownBody(BodyHandle),

    /// A constraint or spring connects a body to itself.
    #[error("Body {0:?} cannot be coupled to itself")]
    SelfCoupling(BodyHandle),
}
