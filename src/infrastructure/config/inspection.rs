//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedSettings;
use super::types::Settings;

#[derive(Debug, Clone, Serialize)]
pub struct SettingsInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub effective: Settings,
}

impl SettingsInspection {
    pub(crate) fn from_loaded(loaded: LoadedSettings) -> Self {
        Self {
            searched_paths: display_paths(&loaded.searched_paths),
            loaded_paths: display_paths(&loaded.loaded_paths),
            effective: loaded.settings,
        }
    }
}

fn display_paths(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}
