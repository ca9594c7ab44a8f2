//! Interface layer
//! 번들 바이너리의 명령 정의와 조립을 담는다.

pub mod cli;
