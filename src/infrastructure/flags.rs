//! clap 기반 플래그 파서 포트 구현.

use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result, bail};
use clap::builder::Str;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, FromArgMatches, Id};

use crate::application::ports::FlagSet;

const HELP_ID: &str = "help";
const POSITIONAL_ID: &str = "args";

/// 명령 하나의 플래그 정의와 마지막 파싱 결과.
///
/// `-h/--help`는 예약되어 있으며, 만나는 즉시 usage 콜백을 호출한다.
/// 위치 인자는 [`FlagSet::args`]로 돌려준다. 인자 구조체가 위치 인자를
/// 직접 선언했다면 그중 마지막 것의 값을, 아니면 나머지 인자 전체를 돌려준다.
pub struct ClapFlags {
    command: clap::Command,
    positional: Id,
    matches: Mutex<Option<ArgMatches>>,
}

impl ClapFlags {
    /// 플래그가 없는 빈 집합.
    pub fn new(name: impl Into<Str>) -> Self {
        Self::from_command(clap::Command::new(name))
    }

    /// derive로 정의한 인자 구조체로 플래그를 구성한다.
    pub fn of<A: clap::Args>(name: impl Into<Str>) -> Self {
        Self::from_command(A::augment_args(clap::Command::new(name)))
    }

    pub fn from_command(command: clap::Command) -> Self {
        let mut command = command
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .arg(
                Arg::new(HELP_ID)
                    .short('h')
                    .long("help")
                    .action(ArgAction::Help),
            );

        let declared = command.get_positionals().last().map(|arg| arg.get_id().clone());
        let positional = match declared {
            Some(id) => id,
            None => {
                command = command.arg(
                    Arg::new(POSITIONAL_ID)
                        .value_name("ARGS")
                        .num_args(0..)
                        .action(ArgAction::Append)
                        .value_parser(clap::value_parser!(String)),
                );
                Id::from(POSITIONAL_ID)
            }
        };

        Self {
            command,
            positional,
            matches: Mutex::new(None),
        }
    }

    /// 마지막 파싱 결과를 derive 구조체로 꺼낸다.
    pub fn extract<A: FromArgMatches>(&self) -> Result<A> {
        let matches = self.lock();
        let matches = matches.as_ref().context("flags have not been parsed yet")?;
        Ok(A::from_arg_matches(matches)?)
    }

    fn lock(&self) -> MutexGuard<'_, Option<ArgMatches>> {
        self.matches.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FlagSet for ClapFlags {
    fn parse(&self, args: &[String], usage: &dyn Fn()) -> Result<()> {
        match self.command.clone().try_get_matches_from(args) {
            Ok(matches) => {
                *self.lock() = Some(matches);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                usage();
                bail!("help requested")
            }
            Err(err) => Err(err.into()),
        }
    }

    fn args(&self) -> Vec<String> {
        self.lock()
            .as_ref()
            .and_then(|m| m.get_raw(self.positional.as_str()))
            .map(|values| {
                values
                    .map(|v| v.to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }
}
