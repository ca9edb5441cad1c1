// Domain layer: the action model and the ports the dispatcher talks to.

pub mod model;
pub mod ports;
