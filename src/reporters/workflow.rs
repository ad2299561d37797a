//! GitHub Actions workflow commands.
//!
//! The runner reads `::command key=value,...::message` lines from stdout and
//! turns them into annotations, log groups and job state changes.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowCommand<'a> {
    command: &'a str,
    properties: Vec<(&'a str, &'a str)>,
    message: &'a str,
}

impl<'a> WorkflowCommand<'a> {
    /// An error annotation.
    pub fn error(message: &'a str) -> Self {
        Self {
            command: "error",
            properties: Vec::new(),
            message,
        }
    }

    /// Attach the annotation to a file.
    pub fn file(mut self, path: &'a str) -> Self {
        self.properties.push(("file", path));
        self
    }
}

impl fmt::Display for WorkflowCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}", self.command)?;
        for (index, (key, value)) in self.properties.iter().enumerate() {
            let separator = if index == 0 { " " } else { "," };
            write!(f, "{}{}={}", separator, key, escape_property(value))?;
        }
        write!(f, "::{}", escape_data(self.message))
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
