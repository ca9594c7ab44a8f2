//! 명령(서브커맨드) 모델.
//! 도움말 전용 명령과 실행 가능한 명령을 같은 인터페이스로 다룬다.

use std::sync::Arc;

use anyhow::Result;

use crate::application::App;
use crate::application::ports::FlagSet;

/// 모든 명령이 노출해야 하는 메타데이터.
///
/// 이 트레이트만 구현하면 도움말 토픽이 되고,
/// [`Command::runnable`]이 값을 돌려주면 실행 가능한 명령이 된다.
pub trait Command: Send + Sync {
    fn name(&self) -> &str;
    fn short(&self) -> &str;
    fn long(&self) -> &str;
    fn usage(&self) -> &str;

    /// 명령 전용 플래그 집합. 도움말 토픽은 보통 없다.
    fn flags(&self) -> Option<&dyn FlagSet> {
        None
    }

    /// 실행 능력 조회. 없으면 도움말 전용 명령으로 취급한다.
    fn runnable(&self) -> Option<&dyn Runnable> {
        None
    }
}

/// 명령 실행 능력.
pub trait Runnable: Send + Sync {
    /// 플래그 파싱 전에 호출된다.
    fn init(&self, _app: &App) -> Result<()> {
        Ok(())
    }

    /// 위치 인자와 함께 명령 본문을 실행한다.
    fn run(&self, args: &[String], app: &App) -> Result<()>;
}

/// 문자열 메타데이터만 가진 기본 명령(도움말 토픽).
#[derive(Default)]
pub struct Topic {
    name: String,
    short: String,
    long: String,
    usage: String,
    flags: Option<Arc<dyn FlagSet>>,
}

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    /// 상세 설명. 도움말 출력 시 템플릿으로 렌더링된다.
    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn with_flags(mut self, flags: Arc<dyn FlagSet>) -> Self {
        self.flags = Some(flags);
        self
    }

    /// 메타데이터는 그대로 두고 실행 능력만 덧붙인다.
    pub fn with_runner<R: Runnable>(self, runner: R) -> Executable<R> {
        Executable {
            topic: self,
            runner,
        }
    }
}

impl Command for Topic {
    fn name(&self) -> &str {
        &self.name
    }

    fn short(&self) -> &str {
        &self.short
    }

    fn long(&self) -> &str {
        &self.long
    }

    fn usage(&self) -> &str {
        &self.usage
    }

    fn flags(&self) -> Option<&dyn FlagSet> {
        self.flags.as_deref()
    }
}

/// [`Topic`]에 실행 능력을 합성한 명령.
pub struct Executable<R> {
    topic: Topic,
    runner: R,
}

impl<R: Runnable> Command for Executable<R> {
    fn name(&self) -> &str {
        self.topic.name()
    }

    fn short(&self) -> &str {
        self.topic.short()
    }

    fn long(&self) -> &str {
        self.topic.long()
    }

    fn usage(&self) -> &str {
        self.topic.usage()
    }

    fn flags(&self) -> Option<&dyn FlagSet> {
        self.topic.flags()
    }

    fn runnable(&self) -> Option<&dyn Runnable> {
        Some(&self.runner)
    }
}

/// 등록된 명령과 등록 시점에 판정한 실행 가능 여부.
#[derive(Clone)]
pub struct Registration {
    command: Arc<dyn Command>,
    runnable: bool,
}

impl Registration {
    pub fn new(command: Arc<dyn Command>) -> Self {
        let runnable = command.runnable().is_some();
        Self { command, runnable }
    }

    pub fn command(&self) -> &Arc<dyn Command> {
        &self.command
    }

    pub fn is_runnable(&self) -> bool {
        self.runnable
    }
}
