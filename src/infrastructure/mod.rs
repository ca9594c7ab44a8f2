//! Infrastructure layer
//! 외부 라이브러리(clap/minijinja)와 파일시스템에 직접 닿는 구현체 집합.

pub mod config;
pub mod flags;
pub mod render;
