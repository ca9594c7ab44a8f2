//! 설정 스키마와 병합 규칙.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Settings {
    /// 사용법 앞에 출력할 소개 문구
    pub intro: Option<String>,
    /// 사용법에 표시할 실행 파일 이름(기본: argv[0])
    pub bin: Option<String>,
    /// 명령 상세 설명 템플릿에 전달할 임의 데이터
    #[serde(default)]
    pub container: Map<String, Value>,
}

impl Settings {
    /// 높은 우선순위 설정을 덮어쓴다. `container`는 키 단위로 병합한다.
    pub fn merge_from(&mut self, other: Settings) {
        if other.intro.is_some() {
            self.intro = other.intro;
        }
        if other.bin.is_some() {
            self.bin = other.bin;
        }
        self.container.extend(other.container);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn merge_overrides_present_fields_only() {
        let mut base: Settings = serde_json::from_value(json!({
            "intro": "base intro",
            "bin": "base",
            "container": { "team": "core", "region": "eu" }
        }))
        .unwrap();
        let overlay: Settings = serde_json::from_value(json!({
            "bin": "overlay",
            "container": { "region": "us" }
        }))
        .unwrap();

        base.merge_from(overlay);

        assert_eq!(base.intro.as_deref(), Some("base intro"));
        assert_eq!(base.bin.as_deref(), Some("overlay"));
        assert_eq!(base.container["team"], "core");
        assert_eq!(base.container["region"], "us");
    }

    #[test]
    fn empty_document_is_default() {
        let parsed: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
