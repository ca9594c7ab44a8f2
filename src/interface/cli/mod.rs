//! CLI 인터페이스 모듈 묶음.
//! 번들 명령 정의와 조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;

pub use composition::build_app;
