use std::path::Path;

use assert_cmd::{assert::Assert, Command};

pub fn input() -> IntegrationInput {
    IntegrationInput {
        classpath: vec![],
        classes: vec![],
        file: false,
    }
}

#[derive(Debug)]
pub struct IntegrationInput {
    classpath: Vec<String>,
    classes: Vec<String>,
    file: bool,
}

impl IntegrationInput {
    pub fn cp(mut self, path: &Path) -> Self {
        self.classpath.push(path.display().to_string());
        self
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    pub fn as_file(mut self) -> Self {
        self.file = true;
        self
    }
}

pub fn exec_integration(state: IntegrationInput) -> Assert {
    let mut cargo_cmd = Command::cargo_bin("locate").expect("cargo to locate the locate binary");

    for cp in &state.classpath {
        cargo_cmd.arg("--cp").arg(cp);
    }

    if state.file {
        cargo_cmd.arg("--file");
    }

    cargo_cmd.args(state.classes);
    cargo_cmd.assert()
}
