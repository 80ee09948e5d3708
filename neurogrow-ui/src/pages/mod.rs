//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod exercises;
pub mod landing;

pub use dashboard::Dashboard;
pub use exercises::Exercises;
pub use landing::Landing;
