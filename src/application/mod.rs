//! Application layer
//! 인자 디스패치와 도움말 흐름을 정의하고 포트를 통해 인프라를 사용한다.

mod app;
mod dispatch;
pub mod error;
mod help;
pub mod ports;

pub use app::{App, PreRunHook};
pub use dispatch::HELP_COMMAND;
pub use error::AppError;
