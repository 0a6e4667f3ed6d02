//! Video configuration: JSON boundary model, normalization, defaults and the generation contract.

pub(crate) mod config;
pub(crate) mod defaults;
pub(crate) mod generation;
pub(crate) mod model;
pub(crate) mod normalize;
pub(crate) mod validate;
