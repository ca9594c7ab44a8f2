//! 번들 바이너리가 등록하는 명령 모음.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::application::App;
use crate::domain::command::{Command, Runnable, Topic};
use crate::infrastructure::config::SettingsInspection;
use crate::infrastructure::flags::ClapFlags;

#[derive(Debug, Args)]
struct EchoArgs {
    /// 마지막 줄바꿈 생략
    #[arg(short = 'n')]
    no_newline: bool,

    /// 대문자로 출력
    #[arg(long)]
    upper: bool,
}

struct Echo {
    flags: Arc<ClapFlags>,
}

impl Runnable for Echo {
    fn run(&self, args: &[String], app: &App) -> Result<()> {
        let opts: EchoArgs = self.flags.extract()?;
        let mut text = args.join(" ");
        if opts.upper {
            text = text.to_uppercase();
        }
        if !opts.no_newline {
            text.push('\n');
        }
        app.out()
            .write_all(text.as_bytes())
            .context("failed to write echo output")
    }
}

/// 위치 인자를 공백으로 이어 출력한다.
pub fn echo() -> Arc<dyn Command> {
    let flags = Arc::new(ClapFlags::of::<EchoArgs>("echo"));
    Arc::new(
        Topic::new("echo")
            .with_short("Print arguments to standard output")
            .with_usage("[-n] [--upper] [ARGS]...")
            .with_long(
                "Echo writes its arguments separated by single spaces.\n\n\
                 Flags:\n    -n        do not print the trailing newline\n    \
                 --upper   convert the text to upper case\n",
            )
            .with_flags(flags.clone())
            .with_runner(Echo { flags }),
    )
}

struct Version;

impl Runnable for Version {
    fn run(&self, args: &[String], app: &App) -> Result<()> {
        if !args.is_empty() {
            bail!("version takes no arguments");
        }
        let name = if app.name().is_empty() {
            env!("CARGO_PKG_NAME")
        } else {
            app.name()
        };
        writeln!(app.out(), "{name} {}", env!("CARGO_PKG_VERSION"))
            .context("failed to write version")
    }
}

/// 버전 정보를 출력한다.
pub fn version() -> Arc<dyn Command> {
    Arc::new(
        Topic::new("version")
            .with_short("Print the version")
            .with_long("Version prints the program name and version.\n")
            .with_runner(Version),
    )
}

struct ConfigShow {
    inspection: SettingsInspection,
}

impl Runnable for ConfigShow {
    fn run(&self, args: &[String], app: &App) -> Result<()> {
        if !args.is_empty() {
            bail!("config:show takes no arguments");
        }
        let json = self.inspection.to_pretty_json()?;
        writeln!(app.out(), "{json}").context("failed to write settings")
    }
}

/// 적용 중인 설정과 탐색 경로를 JSON으로 출력한다.
pub fn config_show(inspection: SettingsInspection) -> Arc<dyn Command> {
    Arc::new(
        Topic::new("config:show")
            .with_short("Show effective settings and searched paths")
            .with_long(
                "Prints the merged settings as JSON, together with every searched\n\
                 path and the paths that were actually loaded.\n",
            )
            .with_runner(ConfigShow { inspection }),
    )
}

/// 설정 파일 위치와 형식에 대한 도움말 토픽.
pub fn config_topic() -> Arc<dyn Command> {
    Arc::new(
        Topic::new("help:config")
            .with_short("Where settings are read from")
            .with_long(
                "Settings are read from these files, later files overriding earlier ones:\n\
                 {% for path in config_paths %}\n    {{ path }}{% endfor %}\n\n\
                 Set {{ config_env }} to add a file with the highest priority.\n\
                 Keys: \"intro\", \"bin\" and \"container\". Values under \"container\"\n\
                 are available to help texts like this one.\n",
            ),
    )
}
