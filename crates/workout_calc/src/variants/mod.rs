//! Concrete activity kinds.
//!
//! Each variant keeps its calorie coefficients as associated constants and
//! implements [`Training`](crate::Training) on top of a shared
//! [`Session`](crate::Session).
//!
//! # Modules
//!
//! - [`running`]: step-based distance, speed-driven calories
//! - [`walking`]: adds the athlete's height to the calorie formula
//! - [`swimming`]: pool-based mean speed

pub mod running;
pub mod swimming;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;
