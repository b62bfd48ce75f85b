pub mod error;
pub mod events;
#[cfg(feature = "desktop")]
pub mod emit;

pub use error::{AppError, AppResult};
