//! `help` 서브커맨드 흐름(전체 사용법 / 명령별 도움말).

use std::io::Write;

use minijinja::{Value, context};

use crate::application::App;
use crate::application::error::AppError;
use crate::infrastructure::render::HelpRenderer;

impl App {
    /// 전체 사용법을 `w`에 출력한다.
    pub fn usage(&self, w: &mut dyn Write) -> Result<(), AppError> {
        let rendered = self.renderer().render_usage(self.command_list())?;
        w.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// `help [command]` 처리.
    ///
    /// 존재하지 않는 명령에 대한 도움말 요청은 아무것도 출력하지 않고 성공한다.
    pub(crate) fn help(&self, args: &[String]) -> Result<(), AppError> {
        match args {
            [] => self.usage(&mut *self.out()),
            [name] => self.command_help(name),
            _ => Err(AppError::TooManyHelpArguments {
                bin: self.bin().to_string(),
            }),
        }
    }

    fn command_help(&self, name: &str) -> Result<(), AppError> {
        let Some(command) = self.lookup(name) else {
            return Ok(());
        };

        let renderer = self.renderer();
        let body = renderer.render(command.long(), self.template_context())?;

        let mut out = self.out();
        if command.runnable().is_some() {
            write!(
                out,
                "usage: {} {} {}\n\n",
                self.bin(),
                command.name(),
                command.usage()
            )?;
        }
        out.write_all(body.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn renderer(&self) -> HelpRenderer {
        HelpRenderer::new(self.bin(), self.intro())
    }

    fn template_context(&self) -> Value {
        match self.container() {
            Some(container) => Value::from_serialize(container),
            None => context! {},
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::application::App;
    use crate::domain::command::{Command, Topic};
    use crate::test_helpers::{SharedBuffer, helper_command, runnable_command};

    fn capture(app: App) -> (App, SharedBuffer) {
        let out = SharedBuffer::default();
        (app.with_bin("test_app").with_stdout(out.clone()), out)
    }

    #[test]
    fn help_for_runnable_prints_synopsis_and_long_text() {
        let (app, out) = capture(App::new(vec![
            runnable_command("foo"),
            runnable_command("bar"),
        ]));

        app.run(&["help", "foo"]).unwrap();

        assert_eq!(
            out.contents(),
            "usage: test_app foo [-c config] [--force] [--dry-run] [ARGS]...\n\n\
             The is a simple noop command for testing purpose."
        );
    }

    #[test]
    fn help_for_topic_prints_only_long_text() {
        let (app, out) = capture(App::new(vec![helper_command("help:foo")]));

        app.run(&["help", "help:foo"]).unwrap();

        assert_eq!(
            out.contents(),
            "The is a simple noop command for testing purpose."
        );
    }

    #[test]
    fn help_with_too_many_arguments_fails() {
        let (app, out) = capture(App::new(vec![runnable_command("foo")]));

        let err = app.run(&["help", "foo", "bar"]).unwrap_err();

        assert_eq!(err.code(), 5);
        assert_eq!(
            err.to_string(),
            "usage: test_app help command\n\nToo many arguments given.\n"
        );
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn help_for_unknown_command_is_silent() {
        let (app, out) = capture(App::new(vec![runnable_command("foo")]));

        app.run(&["help", "missing"]).unwrap();

        assert_eq!(out.contents(), "");
    }

    #[test]
    fn long_text_renders_against_container() {
        let long = "Project {{ project }} via {{ exec_bin() }}\
                    {% for s in stages %} [{{ s }}]{% endfor %}\n";
        let topic: Arc<dyn Command> = Arc::new(Topic::new("help:env").with_long(long));
        let (app, out) = capture(
            App::new(vec![topic])
                .with_container(json!({ "project": "atlas", "stages": ["dev", "prod"] })),
        );

        app.run(&["help", "help:env"]).unwrap();

        assert_eq!(out.contents(), "Project atlas via test_app [dev] [prod]\n");
    }

    #[test]
    fn broken_long_template_is_an_output_error() {
        let topic: Arc<dyn Command> = Arc::new(Topic::new("help:bad").with_long("{% if %}"));
        let (app, _out) = capture(App::new(vec![topic]));

        let err = app.run(&["help", "help:bad"]).unwrap_err();

        assert_eq!(err.code(), 1);
    }

    #[test]
    fn bare_help_renders_usage() {
        let (app, out) = capture(App::new(vec![runnable_command("foo")]));

        app.run(&["help"]).unwrap();

        assert!(out.contents().contains("Available commands:"));
    }
}
