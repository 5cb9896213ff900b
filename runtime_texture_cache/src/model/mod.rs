/// Model module - logical slot owners and the baked-model registry

pub mod bakable_model;
pub mod model_registry;

pub use bakable_model::*;
pub use model_registry::*;
