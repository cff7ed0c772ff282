//! Generate command: collect answers, render, write README.md

use std::path::PathBuf;

use console::style;

use crate::answers::AnswerRecord;
use crate::collect::collect_interactive;
use crate::error::{ReadmeError, Result};
use crate::output::{write_document, DEFAULT_OUTPUT};
use crate::render::{render, render_with_template};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Output file path
    pub output: PathBuf,
    /// Answer file to read instead of prompting
    pub answers: Option<PathBuf>,
    /// Handlebars template replacing the built-in layout
    pub template: Option<PathBuf>,
    /// Print the document instead of writing it
    pub stdout: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            answers: None,
            template: None,
            stdout: false,
        }
    }
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions) -> Result<()> {
    let record = match &options.answers {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading answers from file");
            AnswerRecord::load(path)?
        }
        None => collect_interactive()?,
    };

    let document = render_document(&record, &options)?;

    if options.stdout {
        print!("{}", document);
        return Ok(());
    }

    write_document(&options.output, &document)?;
    println!(
        "{} Wrote {}",
        style("✓").green(),
        options.output.display()
    );

    Ok(())
}

/// Render with the custom template when one is configured
pub fn render_document(record: &AnswerRecord, options: &GenerateOptions) -> Result<String> {
    match &options.template {
        Some(path) => {
            tracing::debug!(path = %path.display(), "rendering with custom template");
            let template = std::fs::read_to_string(path).map_err(|e| {
                ReadmeError::Template(format!("cannot read {}: {}", path.display(), e))
            })?;
            render_with_template(&template, record)
        }
        None => Ok(render(record)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::License;
    use tempfile::TempDir;

    fn answers_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("answers.json");
        std::fs::write(
            &path,
            r#"{"title": "Foo", "license": "BSD", "github": "alice"}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_generate_from_answer_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("README.md");
        let options = GenerateOptions {
            output: output.clone(),
            answers: Some(answers_file(&dir)),
            ..Default::default()
        };

        execute_generate(options).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("# Foo\n"));
        assert!(written.contains("licensed under the BSD license"));
        assert!(written.contains("https://github.com/alice"));
    }

    #[test]
    fn test_write_failure_surfaces() {
        let dir = TempDir::new().unwrap();
        let options = GenerateOptions {
            output: dir.path().join("no-such-dir").join("README.md"),
            answers: Some(answers_file(&dir)),
            ..Default::default()
        };

        let err = execute_generate(options).unwrap_err();
        assert!(matches!(err, ReadmeError::IoFailure { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_render_document_with_template() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("readme.hbs");
        std::fs::write(&template, "# {{title}}\n{{license_notice}}\n").unwrap();

        let record = AnswerRecord {
            title: "Foo".into(),
            license: License::Gpl,
            ..Default::default()
        };
        let options = GenerateOptions {
            template: Some(template),
            ..Default::default()
        };

        let out = render_document(&record, &options).unwrap();
        assert_eq!(out, "# Foo\nThis project is licensed under the GPL license.\n");
    }

    #[test]
    fn test_missing_template_is_template_error() {
        let options = GenerateOptions {
            template: Some(PathBuf::from("/nonexistent/readme.hbs")),
            ..Default::default()
        };
        let err = render_document(&AnswerRecord::default(), &options).unwrap_err();
        assert!(matches!(err, ReadmeError::Template(_)));
    }
}
