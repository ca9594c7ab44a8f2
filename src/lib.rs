//! cmdkit library root.
//! `bin command [args]` 형태의 서브커맨드 CLI를 만드는 프레임워크.
//!
//! 명령은 [`domain::Command`]로 정의하고 [`App`]에 등록한 뒤
//! [`App::run`]에 인자를 넘긴다. 실패는 [`AppError`]로 돌아오며
//! 종료 코드는 [`AppError::code`]가 정한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

#[cfg(test)]
mod test_helpers;

pub use application::{App, AppError};
pub use domain::{Command, Runnable, Topic};
pub use infrastructure::flags::ClapFlags;
