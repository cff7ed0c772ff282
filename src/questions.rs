//! Question table consumed by the collector

use crate::answers::License;

/// How a question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text, empty allowed
    Input,
    /// Single selection from a fixed list of licenses
    Choice(&'static [License]),
}

/// A single prompt in the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Answer record field the response is stored in
    pub name: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
}

/// The prompt sequence, in the order it is asked
pub const QUESTIONS: &[Question] = &[
    Question {
        name: "title",
        message: "What is the title of your project?",
        kind: QuestionKind::Input,
    },
    Question {
        name: "description",
        message: "Please provide a description of your project",
        kind: QuestionKind::Input,
    },
    Question {
        name: "installation",
        message: "Please provide installation instructions for your project",
        kind: QuestionKind::Input,
    },
    Question {
        name: "usage",
        message: "Please provide usage information for your project",
        kind: QuestionKind::Input,
    },
    Question {
        name: "license",
        message: "Please choose a license for your project",
        kind: QuestionKind::Choice(&[
            License::Mit,
            License::Apache,
            License::Gpl,
            License::Bsd,
            License::None,
        ]),
    },
    Question {
        name: "contributing",
        message: "Please provide contribution guidelines for your project",
        kind: QuestionKind::Input,
    },
    Question {
        name: "tests",
        message: "Please provide test instructions for your project",
        kind: QuestionKind::Input,
    },
    Question {
        name: "github",
        message: "What is your GitHub username?",
        kind: QuestionKind::Input,
    },
    Question {
        name: "email",
        message: "What is your email address?",
        kind: QuestionKind::Input,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerRecord;

    #[test]
    fn test_question_order() {
        let names: Vec<&str> = QUESTIONS.iter().map(|q| q.name).collect();
        assert_eq!(
            names,
            vec![
                "title",
                "description",
                "installation",
                "usage",
                "license",
                "contributing",
                "tests",
                "github",
                "email"
            ]
        );
    }

    #[test]
    fn test_only_license_is_a_choice() {
        for question in QUESTIONS {
            match question.kind {
                QuestionKind::Choice(choices) => {
                    assert_eq!(question.name, "license");
                    assert_eq!(choices, License::all());
                }
                QuestionKind::Input => assert_ne!(question.name, "license"),
            }
        }
    }

    #[test]
    fn test_every_text_question_maps_to_a_field() {
        let mut record = AnswerRecord::default();
        for question in QUESTIONS.iter().filter(|q| q.kind == QuestionKind::Input) {
            assert!(record.set_text(question.name, "x".into()), "{}", question.name);
        }
    }
}
