//! 종료 코드를 함께 전달하는 애플리케이션 오류.

use std::io::{self, Write};

use thiserror::Error;

pub const EXIT_OUTPUT: i32 = 1;
pub const EXIT_UNKNOWN_COMMAND: i32 = 2;
pub const EXIT_INIT: i32 = 3;
pub const EXIT_RUN: i32 = 4;
pub const EXIT_FLAG_PARSE: i32 = 5;
pub const EXIT_PRE_RUN: i32 = 6;

/// 플래그 파서가 도움말을 출력한 뒤 사용하는 종료 코드.
pub const EXIT_FLAG_USAGE: i32 = 2;

/// 디스패치 한 번의 실패 결과. 실패 경로마다 정확히 하나가 만들어진다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown subcommand {name:?}.\nRun '{bin} help' for usage.\n")]
    UnknownCommand { name: String, bin: String },

    #[error("{0:#}")]
    PreRun(anyhow::Error),

    #[error("{0:#}")]
    Init(anyhow::Error),

    #[error("{0:#}")]
    FlagParse(anyhow::Error),

    #[error("{0:#}")]
    Run(anyhow::Error),

    #[error("usage: {bin} help command\n\nToo many arguments given.\n")]
    TooManyHelpArguments { bin: String },

    #[error("failed to render help: {0}")]
    Render(#[from] minijinja::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// 프로세스 종료 코드.
    pub fn code(&self) -> i32 {
        match self {
            Self::UnknownCommand { .. } => EXIT_UNKNOWN_COMMAND,
            Self::PreRun(_) => EXIT_PRE_RUN,
            Self::Init(_) => EXIT_INIT,
            Self::FlagParse(_) | Self::TooManyHelpArguments { .. } => EXIT_FLAG_PARSE,
            Self::Run(_) => EXIT_RUN,
            Self::Render(_) | Self::Io(_) => EXIT_OUTPUT,
        }
    }

    /// 메시지를 `w`에 출력하고 오류의 종료 코드로 프로세스를 끝낸다.
    pub fn exit(&self, w: &mut dyn Write) -> ! {
        let message = self.to_string();
        let _ = if message.ends_with('\n') {
            write!(w, "{message}")
        } else {
            writeln!(w, "{message}")
        };
        let _ = w.flush();
        std::process::exit(self.code())
    }
}
