use crate::error::Result;
use crate::models::RiskAssessment;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Writes risk assessments to a file or stdout
pub struct OutputHandler {
    format: OutputFormat,
    writer: Box<dyn Write + Send>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Jsonl,
    Console,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "jsonl" => OutputFormat::Jsonl,
            "console" => OutputFormat::Console,
            _ => OutputFormat::Jsonl, // Default
        }
    }
}

impl OutputHandler {
    /// Create a new output handler; console output and a missing path go to stdout
    pub fn new(format: OutputFormat, file_path: Option<PathBuf>) -> Result<Self> {
        let writer: Box<dyn Write + Send> = match (format, file_path) {
            (OutputFormat::Console, _) | (_, None) => Box::new(io::stdout()),
            (_, Some(path)) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Box::new(BufWriter::new(file))
            }
        };

        Ok(OutputHandler { format, writer })
    }

    /// Write to an arbitrary sink
    pub fn with_writer(format: OutputFormat, writer: Box<dyn Write + Send>) -> Self {
        OutputHandler { format, writer }
    }

    /// Write one assessment
    pub fn write_assessment(&mut self, assessment: &RiskAssessment) -> Result<()> {
        let output = match self.format {
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(assessment)?),
            OutputFormat::Jsonl => format!("{}\n", serde_json::to_string(assessment)?),
            OutputFormat::Console => Self::render_console(assessment),
        };
        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn render_console(assessment: &RiskAssessment) -> String {
        let mut out = format!(
            "[{}] score {}/100 - {}\n",
            assessment.status.as_str().to_uppercase(),
            assessment.risk_score,
            assessment.recommendation
        );
        for factor in &assessment.factors {
            out.push_str(&format!(
                "  +{:<3} {:<18} {}\n",
                factor.score,
                factor.factor.name(),
                factor.description
            ));
        }
        out
    }

    /// Flush any buffered output
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::RiskFactor;
    use crate::models::{RiskStatus, TriggeredFactor};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn sample() -> RiskAssessment {
        RiskAssessment {
            risk_score: 40,
            status: RiskStatus::Warning,
            factors: vec![TriggeredFactor {
                factor: RiskFactor::MultipleAttempts,
                description: "4 attempts in last hour".to_string(),
                score: 40,
            }],
            recommendation: RiskStatus::Warning.recommendation().to_string(),
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("console"), OutputFormat::Console);
        assert_eq!(OutputFormat::parse("xml"), OutputFormat::Jsonl);
    }

    #[test]
    fn test_jsonl_output() {
        let buf = SharedBuf::default();
        let mut handler = OutputHandler::with_writer(OutputFormat::Jsonl, Box::new(buf.clone()));
        handler.write_assessment(&sample()).unwrap();
        handler.write_assessment(&sample()).unwrap();

        let contents = buf.contents();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["risk_score"], 40);
        assert_eq!(parsed["status"], "warning");
        assert_eq!(parsed["factors"][0]["factor"], "multiple_attempts");
    }

    #[test]
    fn test_console_output() {
        let buf = SharedBuf::default();
        let mut handler = OutputHandler::with_writer(OutputFormat::Console, Box::new(buf.clone()));
        handler.write_assessment(&sample()).unwrap();

        let contents = buf.contents();
        assert!(contents.starts_with("[WARNING] score 40/100 - Allow login but monitor closely"));
        assert!(contents.contains("multiple_attempts"));
        assert!(contents.contains("4 attempts in last hour"));
    }

    #[test]
    fn test_file_output_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assessments.jsonl");

        for _ in 0..2 {
            let mut handler = OutputHandler::new(OutputFormat::Jsonl, Some(path.clone())).unwrap();
            handler.write_assessment(&sample()).unwrap();
            handler.flush().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
