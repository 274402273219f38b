//! Process runner that replays one fixed output

use async_trait::async_trait;
use oms_application::ProcessRunner;
use oms_domain::ConsoleOutput;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub struct ScriptedRunner {
    output: ConsoleOutput,
    calls: Mutex<Vec<(PathBuf, Vec<String>)>>,
}

impl ScriptedRunner {
    pub fn new(output: ConsoleOutput) -> Self {
        Self {
            output,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn programs(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn args(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().iter().map(|(_, a)| a.clone()).collect()
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    async fn run(&self, program: &Path, args: &[String], _cwd: Option<&Path>) -> ConsoleOutput {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_path_buf(), args.to_vec()));
        self.output.clone()
    }
}
