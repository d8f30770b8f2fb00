// src/scoring/attempt.rs

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::test::{PresentationSet, PresentedQuestion, Question};

/// Builds the randomized presentation for one attempt session.
///
/// Question order and each question's option order are permuted with the
/// injected `rng`, so a seeded generator makes the layout reproducible in
/// tests while production passes an entropy-seeded one. The correct answer
/// is never included in the output.
pub fn build_presentation<R: Rng>(
    test_id: i64,
    test_name: String,
    mut questions: Vec<Question>,
    rng: &mut R,
) -> PresentationSet {
    questions.shuffle(rng);

    let presented = questions
        .into_iter()
        .map(|q| {
            let mut options = q.options.0;
            options.shuffle(rng);
            PresentedQuestion {
                id: q.id,
                prompt: q.prompt,
                options,
            }
        })
        .collect();

    PresentationSet {
        test_id,
        test_name,
        questions: presented,
    }
}

/// Scores a submitted answer set against the answer key.
///
/// The key maps question id to the canonical correct option text; comparison
/// is a case-sensitive exact match. A question missing from `answers` counts
/// as a miss. Returns (correct_count, score) where
/// `score = round(correct / total * 100)`, with 0 for an empty key.
pub fn score_answers(
    answers: &HashMap<i64, String>,
    key: &HashMap<i64, String>,
) -> (usize, i64) {
    let total = key.len();
    if total == 0 {
        return (0, 0);
    }

    let correct = key
        .iter()
        .filter(|(q_id, correct_text)| answers.get(q_id) == Some(correct_text))
        .count();

    let score = (correct as f64 / total as f64 * 100.0).round() as i64;
    (correct, score)
}
