//! 에러 모듈
//!
//! - [`errors`] - `AppError`, `AppResult`, `ErrorContext`

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
