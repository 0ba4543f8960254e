pub mod error;
pub mod settings;

pub use error::{AppError, AppResult};
