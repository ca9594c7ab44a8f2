//! 도움말 템플릿 렌더링 모듈(minijinja).

use std::sync::Arc;

use minijinja::value::{Object, from_args};
use minijinja::{Environment, Error, ErrorKind, State, Value, context};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::domain::group::{CommandList, GroupKey};

/// 전체 사용법 템플릿.
///
/// 그룹은 이름순, 기본 그룹이 먼저 나오며 이름 그룹 앞에는 빈 줄과 그룹명이 붙는다.
pub const USAGE_TEMPLATE: &str = "{% if has_intro() %}{{ intro() }}
{% endif %}Usage:
\t{{ exec_bin() }} command [arguments]

{% if list.has_commands(true) %}Available commands:
{% for group in list.groups(true) %}{% if group %}

  {{ group }}{% endif %}{% for cmd in list.commands(true, group) %}
    {{ cmd.name }}{{ space(cmd.name, list.max) }}{{ cmd.short }}{% endfor %}{% endfor %}

Use \"{{ exec_bin() }} help [command]\" for more information about a command.{% endif %}
{% if list.has_commands(false) %}
Help topics:
{% for group in list.groups(false) %}{% if group %}

  {{ group }}{% endif %}{% for cmd in list.commands(false, group) %}
    {{ cmd.name }}{{ space(cmd.name, list.max) }}{{ cmd.short }}{% endfor %}{% endfor %}

Use \"{{ exec_bin() }} help [topic]\" for more information about that topic.
{% endif %}";

/// 앱 정보(`exec_bin`, `intro`)를 함수로 노출하는 렌더러.
pub struct HelpRenderer {
    env: Environment<'static>,
}

impl HelpRenderer {
    pub fn new(bin: &str, intro: &str) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);

        let bin = bin.to_string();
        let intro = intro.to_string();
        let has_intro = !intro.is_empty();

        env.add_function("space", space);
        env.add_function("exec_bin", move || bin.clone());
        env.add_function("has_intro", move || has_intro);
        env.add_function("intro", move || intro.clone());

        Self { env }
    }

    /// 그룹화 뷰를 사용법 템플릿에 적용한다.
    pub fn render_usage(&self, list: CommandList) -> Result<String, Error> {
        self.render(USAGE_TEMPLATE, context! { list => Value::from_object(list) })
    }

    pub fn render(&self, template: &str, ctx: Value) -> Result<String, Error> {
        self.env.render_str(template, ctx)
    }
}

/// `name`을 `max + 2` 칸으로 맞추는 공백 문자열.
pub fn space(name: String, max: usize) -> String {
    " ".repeat((max + 2).saturating_sub(name.width()))
}

#[derive(Serialize)]
struct CommandRow<'a> {
    name: &'a str,
    short: &'a str,
}

fn group_value(group: &GroupKey) -> Value {
    match group.as_name() {
        Some(name) => Value::from(name),
        None => Value::from(()),
    }
}

/// 템플릿에서 `list.groups(true)`처럼 메서드로 조회할 수 있게 한다.
impl Object for CommandList {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        match key.as_str()? {
            "max" => Some(Value::from(self.max())),
            _ => None,
        }
    }

    fn call_method(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, Error> {
        match method {
            "has_commands" => {
                let (runnable,): (bool,) = from_args(args)?;
                Ok(Value::from(self.has_commands(runnable)))
            }
            "groups" => {
                let (runnable,): (bool,) = from_args(args)?;
                let groups: Vec<Value> = self.groups(runnable).map(group_value).collect();
                Ok(Value::from(groups))
            }
            "commands" => {
                let (runnable, group): (bool, Option<String>) = from_args(args)?;
                let group = group.map_or(GroupKey::Default, GroupKey::Named);
                let rows: Vec<CommandRow<'_>> = self
                    .commands(runnable, &group)
                    .iter()
                    .map(|cmd| CommandRow {
                        name: cmd.name(),
                        short: cmd.short(),
                    })
                    .collect();
                Ok(Value::from_serialize(&rows))
            }
            _ => Err(Error::new(
                ErrorKind::UnknownMethod,
                format!("command list has no method named {method}"),
            )),
        }
    }
}
