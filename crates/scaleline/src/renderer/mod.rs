pub mod snapshot;
pub mod surface;
pub mod viewport;
