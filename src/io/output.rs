use crate::core::{FileReport, ProjectReport, RankedMethods};
use colored::*;
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "terminal" | "text" => Some(OutputFormat::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ProjectReport) -> anyhow::Result<()>;
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        for file in &report.files {
            self.write_file(file)?;
        }
        self.write_skipped(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Method Metrics Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Files Analyzed | {} |", report.files.len())?;
        writeln!(self.writer, "| Total Methods | {} |", report.total_methods())?;
        writeln!(self.writer, "| Files Skipped | {} |", report.skipped.len())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_file(&mut self, file: &FileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", file.file_name)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Incorrect method names: {}",
            format_percentage(file.incorrect_name_percentage)
        )?;
        writeln!(self.writer)?;

        match &file.top_methods {
            RankedMethods::NoMethods => {
                writeln!(self.writer, "_No methods._")?;
            }
            RankedMethods::Ranked { methods } => {
                writeln!(self.writer, "| Rank | Method | Complexity |")?;
                writeln!(self.writer, "|------|--------|------------|")?;
                for (rank, method) in methods.iter().enumerate() {
                    writeln!(
                        self.writer,
                        "| {} | `{}` | {} |",
                        rank + 1,
                        method.name,
                        method.score
                    )?;
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_skipped(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        if report.skipped.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Skipped Files")?;
        writeln!(self.writer)?;
        for skipped in &report.skipped {
            writeln!(
                self.writer,
                "- `{}`: {}",
                skipped.path.display(),
                skipped.reason
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    verbose: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verbose: false,
        }
    }

    /// Also list the offending names of each file.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn write_file(&mut self, file: &FileReport) -> anyhow::Result<()> {
        let percentage = format_percentage(file.incorrect_name_percentage);
        let percentage = if file.incorrect_name_percentage > 0.0 {
            percentage.yellow()
        } else {
            percentage.green()
        };
        writeln!(
            self.writer,
            "File {} has a {} of incorrect method names",
            file.file_name.bold(),
            percentage
        )?;

        if self.verbose && !file.non_conforming_names.is_empty() {
            writeln!(
                self.writer,
                "  Non-conforming: {}",
                file.non_conforming_names.join(", ")
            )?;
        }

        match &file.top_methods {
            RankedMethods::NoMethods => {
                writeln!(self.writer, "File {} contains no methods", file.file_name.bold())?;
            }
            RankedMethods::Ranked { methods } => {
                writeln!(
                    self.writer,
                    "In file {} the worst {} methods in term of their complexity score are:",
                    file.file_name.bold(),
                    methods.len()
                )?;
                for method in methods {
                    writeln!(
                        self.writer,
                        "Method {} with complexity score {}",
                        method.name.cyan(),
                        method.score
                    )?;
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        for file in &report.files {
            self.write_file(file)?;
        }

        if !report.skipped.is_empty() {
            writeln!(
                self.writer,
                "{}",
                format!("Skipped {} file(s):", report.skipped.len()).yellow()
            )?;
            for skipped in &report.skipped {
                writeln!(
                    self.writer,
                    "  {}: {}",
                    skipped.path.display(),
                    skipped.reason
                )?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    verbose: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer).verbose(verbose)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MethodNode, SkippedFile, StatementKind, StatementNode};
    use crate::metrics::{assemble_report, AnalysisOptions};
    use std::path::{Path, PathBuf};

    fn sample_report() -> ProjectReport {
        let methods = vec![
            MethodNode::new(
                "updateContent",
                vec![StatementNode::new(StatementKind::LoopFor)],
            ),
            MethodNode::new("run", vec![]),
        ];
        ProjectReport {
            root: PathBuf::from("src"),
            files: vec![
                assemble_report(Path::new("src/Cell.java"), &methods, &AnalysisOptions::default()),
                assemble_report(Path::new("src/Empty.java"), &[], &AnalysisOptions::default()),
            ],
            skipped: vec![SkippedFile {
                path: PathBuf::from("src/Broken.java"),
                reason: "Parse error".to_string(),
            }],
        }
    }

    fn render_terminal(report: &ProjectReport, verbose: bool) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .verbose(verbose)
            .write_report(report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_terminal_output_lines() {
        let output = render_terminal(&sample_report(), false);
        assert!(output.contains("File Cell.java has a 50.0% of incorrect method names"));
        assert!(output.contains(
            "In file Cell.java the worst 2 methods in term of their complexity score are:"
        ));
        assert!(output.contains("Method updateContent with complexity score 1"));
        assert!(output.contains("Method run with complexity score 0"));
        assert!(output.contains("File Empty.java contains no methods"));
        assert!(output.contains("src/Broken.java: Parse error"));
        assert!(!output.contains("Non-conforming"));
    }

    #[test]
    fn test_terminal_verbose_lists_offenders() {
        let output = render_terminal(&sample_report(), true);
        assert!(output.contains("Non-conforming: run"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let report = sample_report();
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report).unwrap();
        let parsed: ProjectReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_markdown_output() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("| Total Methods | 2 |"));
        assert!(output.contains("| 1 | `updateContent` | 1 |"));
        assert!(output.contains("_No methods._"));
        assert!(output.contains("- `src/Broken.java`: Parse error"));
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }
}
