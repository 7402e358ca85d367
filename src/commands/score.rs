//! Score command
//!
//! Evaluates one guess against a solution without starting a game.

use crate::core::{Feedback, Word, WordError};
use crate::output::print_feedback;

/// Evaluate `guess` against `solution` and print the result
///
/// Neither word has to be in the word list.
///
/// # Errors
///
/// Returns an error if either input is not a 5-letter word.
pub fn score_guess(guess: &str, solution: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;

    let feedback = Feedback::evaluate(&guess, &solution);
    print_feedback(&feedback);
    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_any_words() {
        let feedback = score_guess("erase", "speed").unwrap();
        assert_eq!(feedback.pattern(), "Y--YY");
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            score_guess("eras", "speed"),
            Err(WordError::InvalidLength(4))
        );
    }
}
