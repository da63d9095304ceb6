use rand::Rng;

use quiz_core::model::{OPERAND_MAX, OPERAND_MIN, Operation, OperationFilter, Question};

/// Produce `count` random questions honoring the operation filter.
///
/// With `OperationFilter::Both` the operation is chosen per question with an
/// independent coin flip. Operands are drawn independently and uniformly
/// from `1..=10`. A zero count yields an empty set.
pub fn generate(count: u32, filter: OperationFilter, rng: &mut impl Rng) -> Vec<Question> {
    (0..count).map(|_| generate_one(filter, rng)).collect()
}

/// Produce a single random question.
pub fn generate_one(filter: OperationFilter, rng: &mut impl Rng) -> Question {
    let operation = match filter {
        OperationFilter::Multiply => Operation::Multiply,
        OperationFilter::Divide => Operation::Divide,
        OperationFilter::Both => {
            if rng.random_bool(0.5) {
                Operation::Multiply
            } else {
                Operation::Divide
            }
        }
    };

    let a = rng.random_range(OPERAND_MIN..=OPERAND_MAX);
    let b = rng.random_range(OPERAND_MIN..=OPERAND_MAX);

    Question::new(a, b, operation).expect("operands drawn from the valid range")
}
