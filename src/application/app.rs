//! 프로세스 전역 실행 컨텍스트(`App`).

use std::env;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Result;

use crate::domain::command::{Command, Registration};
use crate::domain::group::CommandList;

/// 명령 해석 직후, 초기화 전에 호출되는 훅.
pub type PreRunHook = Box<dyn Fn(&dyn Command) -> Result<()> + Send + Sync>;

type Output = Mutex<Box<dyn Write + Send>>;

/// 등록된 명령 목록과 실행 환경을 담는 컨텍스트.
///
/// 생성 후에는 명령 목록이 바뀌지 않는다. 출력 스트림과 실행 파일 이름만
/// 테스트 등을 위해 교체할 수 있다.
pub struct App {
    name: String,
    bin: String,
    intro: String,
    container: Option<serde_json::Value>,
    commands: Vec<Registration>,
    pre_run: Option<PreRunHook>,
    stdout: Output,
    stderr: Output,
}

impl App {
    /// 전체 명령 목록으로 앱을 만든다. 실행 파일 이름은 `argv[0]`을 쓴다.
    pub fn new(commands: Vec<Arc<dyn Command>>) -> Self {
        Self {
            name: String::new(),
            bin: env::args().next().unwrap_or_default(),
            intro: String::new(),
            container: None,
            commands: commands.into_iter().map(Registration::new).collect(),
            pre_run: None,
            stdout: Mutex::new(Box::new(io::stdout())),
            stderr: Mutex::new(Box::new(io::stderr())),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 사용법 문구에 표시할 실행 파일 이름.
    pub fn with_bin(mut self, bin: impl Into<String>) -> Self {
        self.bin = bin.into();
        self
    }

    /// 사용법 앞에 그대로 출력할 소개 문구.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// 명령 상세 설명 템플릿에 전달할 임의 데이터.
    pub fn with_container(mut self, container: serde_json::Value) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_pre_run<F>(mut self, hook: F) -> Self
    where
        F: Fn(&dyn Command) -> Result<()> + Send + Sync + 'static,
    {
        self.pre_run = Some(Box::new(hook));
        self
    }

    pub fn with_stdout(mut self, w: impl Write + Send + 'static) -> Self {
        self.stdout = Mutex::new(Box::new(w));
        self
    }

    pub fn with_stderr(mut self, w: impl Write + Send + 'static) -> Self {
        self.stderr = Mutex::new(Box::new(w));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bin(&self) -> &str {
        &self.bin
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }

    pub fn has_intro(&self) -> bool {
        !self.intro.is_empty()
    }

    pub fn container(&self) -> Option<&serde_json::Value> {
        self.container.as_ref()
    }

    pub(crate) fn pre_run(&self) -> Option<&PreRunHook> {
        self.pre_run.as_ref()
    }

    /// 등록 순서대로 명령을 순회한다.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.iter().map(Registration::command)
    }

    /// 등록 순서로 선형 탐색해 이름이 정확히 같은 첫 명령을 찾는다.
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands().find(|cmd| cmd.name() == name)
    }

    /// 도움말 렌더링용 그룹화 뷰를 새로 만든다.
    pub fn command_list(&self) -> CommandList {
        CommandList::build(&self.commands)
    }

    /// 표준 출력 스트림. 명령 구현도 이 스트림에 출력한다.
    pub fn out(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.stdout.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn err(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.stderr.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
