//! Solar-system body constants and per-body model transforms.

mod body;
mod transform;

pub use body::{Body, SOLAR_SYSTEM};
pub use transform::{ScaleMode, model_matrix};
