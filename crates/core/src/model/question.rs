use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest operand a generated question may carry.
pub const OPERAND_MIN: u32 = 1;
/// Largest operand a generated question may carry.
pub const OPERAND_MAX: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("operand {value} is outside the 1..=10 range")]
    OperandOutOfRange { value: u32 },
}

/// The arithmetic operation a single question asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Multiply,
    Divide,
}

impl Operation {
    /// Display glyph for the operation.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Multiply => "\u{d7}",
            Operation::Divide => "\u{f7}",
        }
    }
}

/// Restriction on which operations a generated question set may use.
///
/// `Both` is resolved to a concrete `Operation` per question at generation
/// time; a `Question` never carries `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationFilter {
    Multiply,
    Divide,
    Both,
}

/// Immutable arithmetic problem.
///
/// The displayed text and the correct answer are pure functions of the
/// operands and the operation:
/// - multiply: shows `a × b = ?`, answer is `a * b`
/// - divide: shows `(a·b) ÷ a = ?`, answer is `b`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    a: u32,
    b: u32,
    operation: Operation,
}

impl Question {
    /// Build a question from validated operands.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::OperandOutOfRange` if either operand falls
    /// outside `1..=10`.
    pub fn new(a: u32, b: u32, operation: Operation) -> Result<Self, QuestionError> {
        for value in [a, b] {
            if !(OPERAND_MIN..=OPERAND_MAX).contains(&value) {
                return Err(QuestionError::OperandOutOfRange { value });
            }
        }
        Ok(Self { a, b, operation })
    }

    #[must_use]
    pub fn a(&self) -> u32 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> u32 {
        self.b
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The value shown on the left-hand side of a division prompt.
    #[must_use]
    pub fn dividend(&self) -> u32 {
        self.a * self.b
    }

    /// The expected answer.
    #[must_use]
    pub fn answer(&self) -> u32 {
        match self.operation {
            Operation::Multiply => self.a * self.b,
            Operation::Divide => self.b,
        }
    }

    /// Display text for the prompt, language-independent.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self.operation {
            Operation::Multiply => {
                format!("{} {} {} = ?", self.a, self.operation.symbol(), self.b)
            }
            Operation::Divide => {
                format!(
                    "{} {} {} = ?",
                    self.dividend(),
                    self.operation.symbol(),
                    self.a
                )
            }
        }
    }

    /// Whether a submitted value matches the expected answer.
    #[must_use]
    pub fn accepts(&self, value: u32) -> bool {
        value == self.answer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication_answer_is_the_product() {
        let q = Question::new(3, 4, Operation::Multiply).unwrap();
        assert_eq!(q.answer(), 12);
        assert_eq!(q.prompt(), "3 \u{d7} 4 = ?");
        assert!(q.accepts(12));
        assert!(!q.accepts(11));
    }

    #[test]
    fn division_answer_is_the_second_operand() {
        let q = Question::new(3, 4, Operation::Divide).unwrap();
        assert_eq!(q.answer(), 4);
        assert_eq!(q.dividend(), 12);
        assert_eq!(q.prompt(), "12 \u{f7} 3 = ?");
    }

    #[test]
    fn operands_outside_range_are_rejected() {
        let err = Question::new(0, 4, Operation::Multiply).unwrap_err();
        assert!(matches!(err, QuestionError::OperandOutOfRange { value: 0 }));

        let err = Question::new(3, 11, Operation::Divide).unwrap_err();
        assert!(matches!(err, QuestionError::OperandOutOfRange { value: 11 }));
    }

    #[test]
    fn boundary_operands_are_accepted() {
        assert!(Question::new(1, 10, Operation::Multiply).is_ok());
        assert!(Question::new(10, 1, Operation::Divide).is_ok());
    }
}
