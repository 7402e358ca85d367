//! Guess evaluation
//!
//! Scores a guess against the solution, producing one status per letter:
//! - Correct: letter in the right position
//! - Present: letter elsewhere in the solution
//! - Absent: letter not in the solution, or every occurrence already matched

use super::word::WORD_LENGTH;
use super::{TileStatus, Word};

/// Scored guess: each guessed letter paired with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    letters: [u8; WORD_LENGTH],
    statuses: [TileStatus; WORD_LENGTH],
}

impl Feedback {
    /// Evaluate `guess` against `solution`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters: a
    /// letter repeated in the guess is marked present only as many times as
    /// it still occurs in the solution after exact matches are removed.
    ///
    /// # Algorithm
    /// 1. First pass: Mark exact matches correct and remove them from the pool
    /// 2. Second pass: Mark remaining letters present while the pool has them, absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, TileStatus, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let solution = Word::new("speed").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &solution);
    ///
    /// assert_eq!(feedback.pattern(), "Y--YY");
    /// assert_eq!(feedback.status_at(0), TileStatus::Present);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut statuses = [TileStatus::Absent; WORD_LENGTH];
        let mut available = solution.char_counts();

        // First pass: exact position matches
        for (i, status) in statuses.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == solution.char_at(i) {
                *status = TileStatus::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-but-misplaced, limited by what is left
        for (i, status) in statuses.iter_mut().enumerate() {
            if *status == TileStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *status = TileStatus::Present;
                *count -= 1;
            }
        }

        Self {
            letters: *guess.chars(),
            statuses,
        }
    }

    /// Status at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> TileStatus {
        self.statuses[position]
    }

    /// All statuses in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[TileStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// Iterate over `(letter, status)` pairs in guess order
    pub fn iter(&self) -> impl Iterator<Item = (char, TileStatus)> + '_ {
        self.letters
            .iter()
            .zip(self.statuses.iter())
            .map(|(&letter, &status)| (char::from(letter), status))
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.statuses.iter().all(|&s| s == TileStatus::Correct)
    }

    /// Count the correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(TileStatus::Correct)
    }

    /// Count the present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(TileStatus::Present)
    }

    fn count(&self, wanted: TileStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == wanted).count()
    }

    /// Compact notation: `G` correct, `Y` present, `-` absent
    #[must_use]
    pub fn pattern(&self) -> String {
        self.statuses
            .iter()
            .map(|status| match status {
                TileStatus::Correct => 'G',
                TileStatus::Present => 'Y',
                _ => '-',
            })
            .collect()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, solution: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(solution).unwrap())
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = score("abcde", "fghij");
        assert_eq!(feedback.pattern(), "-----");
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
        assert!(!feedback.is_win());
    }

    #[test]
    fn feedback_all_correct() {
        let feedback = score("apple", "apple");
        assert!(feedback.is_win());
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_duplicate_letters_in_guess_and_solution() {
        // ERASE vs SPEED: both E's in the guess map onto the two E's of SPEED
        let feedback = score("erase", "speed");
        assert_eq!(feedback.pattern(), "Y--YY");

        let e_marks = feedback
            .iter()
            .filter(|&(letter, status)| letter == 'E' && status != TileStatus::Absent)
            .count();
        assert_eq!(e_marks, 2);
    }

    #[test]
    fn feedback_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: the second O is an exact match, the first is misplaced
        let feedback = score("robot", "floor");
        assert_eq!(feedback.pattern(), "YY-G-");
    }

    #[test]
    fn feedback_excess_duplicates_marked_absent() {
        // Only one L in LEMON: the first L is present, the second absent
        let feedback = score("hello", "lemon");
        assert_eq!(feedback.pattern(), "-GY-Y");

        // Three E's guessed, three in the solution
        let feedback = score("eerie", "geese");
        assert_eq!(feedback.status_at(0), TileStatus::Present);
        assert_eq!(feedback.status_at(1), TileStatus::Correct);
        assert_eq!(feedback.status_at(4), TileStatus::Correct);
        assert_eq!(feedback.count_correct() + feedback.count_present(), 3);
    }

    #[test]
    fn feedback_correct_iff_same_letter_at_position() {
        let pairs = [
            ("apple", "paper"),
            ("zesty", "zebra"),
            ("queen", "quiet"),
            ("xerox", "earth"),
            ("llama", "label"),
        ];
        for (guess, solution) in pairs {
            let feedback = score(guess, solution);
            let g = guess.to_uppercase();
            let s = solution.to_uppercase();
            for (i, (a, b)) in g.bytes().zip(s.bytes()).enumerate() {
                assert_eq!(
                    feedback.status_at(i) == TileStatus::Correct,
                    a == b,
                    "{guess} vs {solution} at {i}"
                );
            }
        }
    }

    #[test]
    fn feedback_never_exceeds_letter_count() {
        let pairs = [
            ("aaaaa", "apple"),
            ("ppppp", "apple"),
            ("eeeee", "geese"),
            ("ooooo", "floor"),
        ];
        for (guess, solution) in pairs {
            let feedback = score(guess, solution);
            let letter = guess.to_uppercase().chars().next().unwrap();
            let in_solution = solution.to_uppercase().matches(letter).count();
            let marked = feedback
                .iter()
                .filter(|&(_, status)| status != TileStatus::Absent)
                .count();
            assert_eq!(marked, in_solution, "{guess} vs {solution}");
        }
    }

    #[test]
    fn feedback_iter_pairs_letters() {
        let feedback = score("crane", "slate");
        let pairs: Vec<(char, TileStatus)> = feedback.iter().collect();
        assert_eq!(pairs[0], ('C', TileStatus::Absent));
        assert_eq!(pairs[2], ('A', TileStatus::Correct));
        assert_eq!(pairs[4], ('E', TileStatus::Correct));
    }
}
