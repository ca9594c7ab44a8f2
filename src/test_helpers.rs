//! 테스트 공용 fixture.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::application::App;
use crate::domain::command::{Command, Runnable, Topic};
use crate::infrastructure::flags::ClapFlags;

/// 여러 곳에서 공유하는 출력 버퍼.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct NoOp;

impl Runnable for NoOp {
    fn run(&self, _args: &[String], _app: &App) -> Result<()> {
        Ok(())
    }
}

fn topic(name: &str) -> Topic {
    Topic::new(name)
        .with_usage("[-c config] [--force] [--dry-run] [ARGS]...")
        .with_short(format!("This a one line info for {name}"))
        .with_long("The is a simple noop command for testing purpose.")
        .with_flags(Arc::new(ClapFlags::new("test")))
}

pub fn runnable_command(name: &str) -> Arc<dyn Command> {
    Arc::new(topic(name).with_runner(NoOp))
}

pub fn helper_command(name: &str) -> Arc<dyn Command> {
    Arc::new(topic(name))
}
