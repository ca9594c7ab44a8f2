//! 애플리케이션 조립(composition root) 모듈.

use serde_json::Value;
use tracing::debug;

use crate::application::App;
use crate::infrastructure::config::{CONFIG_ENV, SettingsInspection};
use crate::interface::cli::command;

/// 설정 진단 결과로 번들 명령을 등록한 앱을 만든다.
pub fn build_app(inspection: SettingsInspection) -> App {
    let settings = inspection.effective.clone();

    let mut container = settings.container;
    container
        .entry("config_paths")
        .or_insert_with(|| Value::from(inspection.searched_paths.clone()));
    container
        .entry("config_env")
        .or_insert_with(|| Value::from(CONFIG_ENV));

    let mut app = App::new(vec![
        command::echo(),
        command::version(),
        command::config_show(inspection),
        command::config_topic(),
    ])
    .with_name(env!("CARGO_PKG_NAME"))
    .with_container(Value::Object(container))
    .with_pre_run(|cmd| {
        debug!(command = cmd.name(), "pre-run");
        Ok(())
    });

    if let Some(intro) = settings.intro {
        app = app.with_intro(intro);
    }
    if let Some(bin) = settings.bin {
        app = app.with_bin(bin);
    }
    app
}
