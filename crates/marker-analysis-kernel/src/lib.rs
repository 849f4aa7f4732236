pub mod analysis;
pub mod constants;
pub mod model;
