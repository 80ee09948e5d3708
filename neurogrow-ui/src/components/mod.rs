//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chart;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use chart::{RadarChart, WeeklyChart};
pub use nav::Nav;
pub use stat_card::{GameStat, StatCard};
pub use toast::Toast;
