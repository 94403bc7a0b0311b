//! Runs the compiled `autocolor` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of one CLI invocation
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.is_empty()).collect()
    }

    /// The color column of `text` output
    pub fn colors(&self) -> Vec<&str> {
        self.lines()
            .iter()
            .map(|line| line.rsplit('\t').next().unwrap_or(""))
            .collect()
    }
}

/// Builder for an `autocolor` command line
pub struct TestCli {
    args: Vec<String>,
    stdin: Option<String>,
}

impl TestCli {
    pub fn new(subcommand: &str) -> Self {
        Self {
            args: vec![subcommand.to_string()],
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn config(self, path: &Path) -> Self {
        self.arg("--config").arg(path.display().to_string())
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn run(self) -> CliOutput {
        let mut child = Command::new(env!("CARGO_BIN_EXE_autocolor"))
            .args(&self.args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start autocolor");

        {
            let mut stdin = child.stdin.take().expect("stdin is piped");
            if let Some(input) = &self.stdin {
                stdin
                    .write_all(input.as_bytes())
                    .expect("Failed to write stdin");
            }
        }

        let output = child.wait_with_output().expect("Failed to wait for autocolor");
        CliOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
