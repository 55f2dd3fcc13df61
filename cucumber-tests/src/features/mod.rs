pub mod world;

pub use world::EnrollWorld;
