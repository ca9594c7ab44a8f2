//! Domain layer
//! 명령 모델과 그룹화 규칙을 외부 의존성 없이 표현한다.

pub mod command;
pub mod group;

pub use command::{Command, Executable, Registration, Runnable, Topic};
pub use group::{CommandList, GroupKey};
