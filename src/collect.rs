//! Interactive answer collection
//!
//! [`Collector`] walks [`QUESTIONS`] in order and asks a [`Prompter`] for each
//! answer. [`TerminalPrompter`] is the dialoguer-backed implementation used by
//! the CLI; tests drive the collector with a scripted prompter.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::answers::{AnswerRecord, License};
use crate::error::{ReadmeError, Result};
use crate::questions::{Question, QuestionKind, QUESTIONS};

/// Source of single answers
pub trait Prompter {
    /// Ask a free-text question; empty answers are allowed
    fn input(&mut self, question: &Question) -> Result<String>;

    /// Ask for one of `choices`, returning its index
    fn select(&mut self, question: &Question, choices: &[&str]) -> Result<usize>;
}

/// Prompts on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, question: &Question) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(question.message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn select(&mut self, question: &Question, choices: &[&str]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(question.message)
            .items(choices)
            .default(0)
            .interact_opt()?
            .ok_or_else(|| ReadmeError::InputAborted(format!("no choice made for {}", question.name)))
    }
}

/// Gathers a complete [`AnswerRecord`] from a prompter
pub struct Collector<'p> {
    prompter: &'p mut dyn Prompter,
}

impl<'p> Collector<'p> {
    pub fn new(prompter: &'p mut dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Ask every question in order
    ///
    /// The first failed prompt aborts the whole sequence.
    pub fn collect(&mut self) -> Result<AnswerRecord> {
        let mut record = AnswerRecord::default();

        for question in QUESTIONS {
            match question.kind {
                QuestionKind::Input => {
                    let answer = self.prompter.input(question)?;
                    if !record.set_text(question.name, answer) {
                        tracing::warn!("No answer field for question: {}", question.name);
                    }
                }
                QuestionKind::Choice(choices) => {
                    record.license = self.ask_license(question, choices)?;
                }
            }
            tracing::debug!(field = question.name, "answered");
        }

        Ok(record)
    }

    fn ask_license(&mut self, question: &Question, choices: &[License]) -> Result<License> {
        let names: Vec<&str> = choices.iter().map(|l| l.name()).collect();
        let index = self.prompter.select(question, &names)?;
        choices.get(index).copied().ok_or_else(|| {
            ReadmeError::InputAborted(format!(
                "choice {} out of range for {}",
                index, question.name
            ))
        })
    }
}

/// Run the interactive sequence on the terminal
pub fn collect_interactive() -> Result<AnswerRecord> {
    println!("{} README Generator\n", style("→").cyan());
    let mut prompter = TerminalPrompter::new();
    Collector::new(&mut prompter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers and records the questions asked
    struct ScriptedPrompter {
        answers: VecDeque<&'static str>,
        asked: Vec<&'static str>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self, question: &Question) -> Result<&'static str> {
            self.asked.push(question.name);
            self.answers
                .pop_front()
                .ok_or_else(|| ReadmeError::InputAborted("script exhausted".into()))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&mut self, question: &Question) -> Result<String> {
            self.next(question).map(str::to_string)
        }

        fn select(&mut self, question: &Question, choices: &[&str]) -> Result<usize> {
            let answer = self.next(question)?;
            choices
                .iter()
                .position(|c| *c == answer)
                .ok_or_else(|| ReadmeError::InputAborted(format!("bad choice {}", answer)))
        }
    }

    #[test]
    fn test_collects_all_fields_in_order() {
        let mut prompter = ScriptedPrompter::new(&[
            "Foo",
            "A tool",
            "npm i foo",
            "run foo",
            "GPL",
            "PRs welcome",
            "run test suite",
            "alice",
            "a@example.com",
        ]);
        let record = Collector::new(&mut prompter).collect().unwrap();

        assert_eq!(record.title, "Foo");
        assert_eq!(record.usage, "run foo");
        assert_eq!(record.license, License::Gpl);
        assert_eq!(record.contributing, "PRs welcome");
        assert_eq!(record.email, "a@example.com");

        let expected: Vec<&str> = QUESTIONS.iter().map(|q| q.name).collect();
        assert_eq!(prompter.asked, expected);
    }

    #[test]
    fn test_empty_answers_are_kept() {
        let mut prompter =
            ScriptedPrompter::new(&["", "", "", "", "None", "", "", "", ""]);
        let record = Collector::new(&mut prompter).collect().unwrap();
        assert_eq!(record, AnswerRecord::default());
    }

    #[test]
    fn test_abort_stops_sequence() {
        let mut prompter = ScriptedPrompter::new(&["Foo", "A tool"]);
        let err = Collector::new(&mut prompter).collect().unwrap_err();
        assert!(matches!(err, ReadmeError::InputAborted(_)));
        assert_eq!(prompter.asked, vec!["title", "description", "installation"]);
    }
}
