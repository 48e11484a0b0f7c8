use crate::extension::{ExtensionInfo, ResolvedConfiguration};
use std::io::{self, Write};

const BOLD: &str = "\u{1b}[1m";
const FAINT: &str = "\u{1b}[2m";
const RESET: &str = "\u{1b}[0m";

/// Writes buildpack-style output: a bold title line per extension, indented
/// headers and body lines beneath it.
///
/// Write failures are ignored; a closed stdout must not fail the build.
pub struct BuildLogger<W: Write> {
    writer: W,
    color: bool,
    debug: bool,
}

impl BuildLogger<io::Stdout> {
    pub fn stdout(debug: bool) -> Self {
        Self {
            writer: io::stdout(),
            color: atty::is(atty::Stream::Stdout),
            debug,
        }
    }
}

impl<W: Write> BuildLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: false,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn title(&mut self, info: &ExtensionInfo) {
        let name = if info.name.is_empty() {
            info.id.as_str()
        } else {
            info.name.as_str()
        };
        let line = format!("{} {}", self.bold(name), info.version);
        self.line(line.trim_end());
        if let Some(homepage) = &info.homepage {
            let homepage = format!("  {}", self.faint(homepage));
            self.line(&homepage);
        }
    }

    pub fn header(&mut self, message: &str) {
        self.line(&format!("  {message}"));
    }

    pub fn body(&mut self, message: &str) {
        let faint = self.faint(message);
        for line in faint.lines() {
            self.line(&format!("    {line}"));
        }
    }

    pub fn debug(&mut self, message: &str) {
        if self.debug {
            let text = self.faint(message);
            self.line(&text);
        }
    }

    /// Prints `$NAME  value  description` rows with aligned columns.
    pub fn configuration_table(&mut self, configurations: &[ResolvedConfiguration]) {
        if configurations.is_empty() {
            return;
        }

        self.header("Build Configuration:");

        let name_width = configurations
            .iter()
            .map(|c| c.name.len() + 1)
            .max()
            .unwrap_or(0);
        let value_width = configurations
            .iter()
            .map(|c| c.value.len())
            .max()
            .unwrap_or(0);

        for c in configurations {
            let row = format!(
                "${:<name_w$}  {:<value_w$}  {}",
                c.name,
                c.value,
                c.description,
                name_w = name_width - 1,
                value_w = value_width,
            );
            self.body(row.trim_end());
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn faint(&self, text: &str) -> String {
        if self.color {
            format!("{FAINT}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }
}
