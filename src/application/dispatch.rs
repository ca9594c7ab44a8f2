//! 프로세스 인자를 명령으로 해석해 실행하는 디스패처.

use std::io::Write;

use tracing::{debug, warn};

use crate::application::App;
use crate::application::error::{AppError, EXIT_FLAG_USAGE};

/// 도움말 흐름으로 분기하는 예약 서브커맨드.
pub const HELP_COMMAND: &str = "help";

impl App {
    /// `args[0]`을 서브커맨드 이름으로, 나머지를 그 인자로 실행한다.
    ///
    /// 오류는 종료 코드를 담고 있으며, 호출 측이 [`AppError::exit`]로 프로세스를 끝낸다.
    ///
    /// ```no_run
    /// # use cmdkit::application::App;
    /// let app = App::new(Vec::new());
    /// let args: Vec<String> = std::env::args().skip(1).collect();
    /// if let Err(err) = app.run(&args) {
    ///     err.exit(&mut std::io::stderr());
    /// }
    /// ```
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<(), AppError> {
        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        let Some((name, rest)) = args.split_first() else {
            return self.help(&[]);
        };

        if name == HELP_COMMAND {
            return self.help(rest);
        }

        let unknown = || AppError::UnknownCommand {
            name: name.clone(),
            bin: self.bin().to_string(),
        };

        let Some(command) = self.lookup(name) else {
            debug!(command = %name, "no such command");
            return Err(unknown());
        };
        debug!(command = %name, "resolved command");

        if let Some(hook) = self.pre_run() {
            hook(command.as_ref()).map_err(AppError::PreRun)?;
        }

        let Some(runnable) = command.runnable() else {
            warn!(command = %name, "command is a help topic and cannot be run");
            return Err(unknown());
        };

        runnable.init(self).map_err(AppError::Init)?;
        debug!(command = %name, "initialized command");

        let positional = match command.flags() {
            Some(flags) => {
                let usage: &dyn Fn() = &|| std::process::exit(self.flag_usage(name));
                flags.parse(rest, usage).map_err(AppError::FlagParse)?;
                flags.args()
            }
            None => rest.to_vec(),
        };

        debug!(command = %name, args = ?positional, "running command");
        runnable.run(&positional, self).map_err(AppError::Run)
    }

    /// 플래그 파서의 usage 콜백 본문. 명령 도움말을 출력하고 종료 코드를 돌려준다.
    fn flag_usage(&self, name: &str) -> i32 {
        if let Err(err) = self.help(&[name.to_string()]) {
            let _ = writeln!(self.err(), "{err}");
        }
        EXIT_FLAG_USAGE
    }
}
