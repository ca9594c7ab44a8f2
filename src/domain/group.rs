//! 이름 규칙(`namespace:name`) 기반 명령 그룹화 뷰.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use unicode_width::UnicodeWidthStr;

use crate::domain::command::{Command, Registration};

/// 명령이 속한 네임스페이스.
///
/// `Default`는 `:`가 없는 명령의 예약 그룹이며 어떤 이름 그룹보다 먼저 정렬된다.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Default,
    Named(String),
}

impl GroupKey {
    /// 첫 `:` 앞부분을 그룹으로 본다. 접두사가 비어 있으면 기본 그룹이다.
    pub fn of(name: &str) -> Self {
        match name.find(':') {
            Some(idx) if idx > 0 => Self::Named(name[..idx].to_string()),
            _ => Self::Default,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Named(name) => Some(name),
        }
    }
}

type Buckets = BTreeMap<GroupKey, Vec<Arc<dyn Command>>>;

/// 도움말 렌더링 한 번을 위해 만드는 그룹화 결과.
pub struct CommandList {
    max: usize,
    runnable: Buckets,
    helpers: Buckets,
}

impl CommandList {
    /// 등록 목록을 한 번 순회해 실행/도움말 버킷과 그룹으로 나눈다.
    pub fn build(registrations: &[Registration]) -> Self {
        let mut max = 0;
        let mut runnable = Buckets::new();
        let mut helpers = Buckets::new();

        for registration in registrations {
            let command = registration.command();
            max = max.max(command.name().width());

            let bucket = if registration.is_runnable() {
                &mut runnable
            } else {
                &mut helpers
            };
            bucket
                .entry(GroupKey::of(command.name()))
                .or_default()
                .push(Arc::clone(command));
        }

        for commands in runnable.values_mut().chain(helpers.values_mut()) {
            commands.sort_by(|a, b| a.name().cmp(b.name()));
        }

        Self {
            max,
            runnable,
            helpers,
        }
    }

    /// 전체 명령 중 가장 긴 이름의 표시 폭.
    pub fn max(&self) -> usize {
        self.max
    }

    pub fn has_commands(&self, runnable: bool) -> bool {
        !self.bucket(runnable).is_empty()
    }

    /// 버킷에 존재하는 그룹을 오름차순으로 돌려준다.
    pub fn groups(&self, runnable: bool) -> impl Iterator<Item = &GroupKey> {
        self.bucket(runnable).keys()
    }

    /// 그룹에 속한 명령을 이름 오름차순으로 돌려준다.
    pub fn commands(&self, runnable: bool, group: &GroupKey) -> &[Arc<dyn Command>] {
        self.bucket(runnable)
            .get(group)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn bucket(&self, runnable: bool) -> &Buckets {
        if runnable {
            &self.runnable
        } else {
            &self.helpers
        }
    }
}

impl fmt::Debug for CommandList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn names(buckets: &Buckets) -> BTreeMap<&GroupKey, Vec<&str>> {
            buckets
                .iter()
                .map(|(group, commands)| (group, commands.iter().map(|c| c.name()).collect()))
                .collect()
        }

        f.debug_struct("CommandList")
            .field("max", &self.max)
            .field("runnable", &names(&self.runnable))
            .field("helpers", &names(&self.helpers))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{helper_command, runnable_command};

    fn registrations(commands: Vec<Arc<dyn Command>>) -> Vec<Registration> {
        commands.into_iter().map(Registration::new).collect()
    }

    fn names(commands: &[Arc<dyn Command>]) -> Vec<&str> {
        commands.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn group_key_uses_prefix_before_first_colon() {
        assert_eq!(GroupKey::of("db:migrate:up"), GroupKey::Named("db".into()));
        assert_eq!(GroupKey::of("build"), GroupKey::Default);
        assert_eq!(GroupKey::of(":odd"), GroupKey::Default);
        assert!(GroupKey::Default < GroupKey::Named(String::new()));
    }

    #[test]
    fn partitions_every_command_exactly_once() {
        let list = CommandList::build(&registrations(vec![
            runnable_command("foo"),
            helper_command("help:foo"),
            runnable_command("db:migrate"),
            helper_command("intro"),
            runnable_command("db:seed"),
        ]));

        let mut seen = Vec::new();
        for runnable in [true, false] {
            for group in list.groups(runnable) {
                seen.extend(names(list.commands(runnable, group)));
            }
        }
        seen.sort();

        assert_eq!(
            seen,
            vec!["db:migrate", "db:seed", "foo", "help:foo", "intro"]
        );
        assert_eq!(
            names(list.commands(false, &GroupKey::Named("help".into()))),
            vec!["help:foo"]
        );
        assert!(list.commands(true, &GroupKey::Named("help".into())).is_empty());
    }

    #[test]
    fn groups_and_commands_are_sorted() {
        let list = CommandList::build(&registrations(vec![
            runnable_command("zeta:b"),
            runnable_command("foo"),
            runnable_command("alpha:z"),
            runnable_command("bar"),
            runnable_command("alpha:a"),
        ]));

        let groups: Vec<_> = list.groups(true).cloned().collect();
        assert_eq!(
            groups,
            vec![
                GroupKey::Default,
                GroupKey::Named("alpha".into()),
                GroupKey::Named("zeta".into()),
            ]
        );
        assert_eq!(names(list.commands(true, &GroupKey::Default)), vec!["bar", "foo"]);
        assert_eq!(
            names(list.commands(true, &GroupKey::Named("alpha".into()))),
            vec!["alpha:a", "alpha:z"]
        );
    }

    #[test]
    fn max_spans_both_buckets() {
        let list = CommandList::build(&registrations(vec![
            runnable_command("foo"),
            helper_command("help:longest"),
        ]));

        assert_eq!(list.max(), "help:longest".len());
    }

    #[test]
    fn has_commands_reflects_bucket_contents() {
        let list = CommandList::build(&registrations(vec![runnable_command("foo")]));
        assert!(list.has_commands(true));
        assert!(!list.has_commands(false));

        let empty = CommandList::build(&[]);
        assert!(!empty.has_commands(true));
        assert!(!empty.has_commands(false));
        assert_eq!(empty.max(), 0);
    }
}
