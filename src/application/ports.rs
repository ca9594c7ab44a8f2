//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;

/// 명령별 플래그 파서 포트.
///
/// `usage`는 파서가 도움말 요청(`--help` 등)을 만났을 때 호출하는 콜백이다.
/// 디스패처는 이 콜백에서 명령 도움말을 출력하고 프로세스를 종료한다.
pub trait FlagSet: Send + Sync {
    fn parse(&self, args: &[String], usage: &dyn Fn()) -> Result<()>;

    /// 마지막 파싱에서 남은 위치 인자.
    fn args(&self) -> Vec<String>;
}
