//! 번들 바이너리용 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;
mod types;

use anyhow::Result;

pub use inspection::SettingsInspection;
pub use loader::{CONFIG_ENV, settings_paths};
pub use types::Settings;

impl Settings {
    /// 디버깅/진단용 설정 정보를 구성한다.
    pub fn inspect() -> Result<SettingsInspection> {
        let loaded = loader::load_merged_settings()?;
        Ok(SettingsInspection::from_loaded(loaded))
    }
}

impl SettingsInspection {
    /// 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
