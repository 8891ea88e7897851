/// The routine under measurement: count maximal contiguous runs of letter
/// characters in a text block.
///
/// The last character is handled by a distinct branch — a trailing letter
/// closes the current run on its own. That boundary check runs once per
/// character and is part of the workload's cost profile, so it stays in the
/// scan rather than being hoisted out.
pub fn word_count(s: &str) -> u64 {
    let mut count = 0;
    let mut in_word = false;

    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let at_end = chars.peek().is_none();
        if c.is_alphabetic() && !at_end {
            in_word = true;
        } else if !c.is_alphabetic() && in_word {
            count += 1;
            in_word = false;
        } else if c.is_alphabetic() && at_end {
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn single_word() {
        assert_eq!(word_count("hello"), 1);
    }

    #[test]
    fn two_words() {
        assert_eq!(word_count("hello world"), 2);
    }

    #[test]
    fn consecutive_separators_collapse() {
        assert_eq!(word_count("hello   world"), 2);
    }

    #[test]
    fn trailing_letter_closes_the_run() {
        // The end-of-string branch must count the final run.
        assert_eq!(word_count("ab"), 1);
        assert_eq!(word_count("a"), 1);
    }

    #[test]
    fn trailing_separator_closes_the_run_too() {
        assert_eq!(word_count("hello "), 1);
        assert_eq!(word_count("hello world\n"), 2);
    }

    #[test]
    fn non_letters_split_runs() {
        // Digits and punctuation are separators, not word characters.
        assert_eq!(word_count("ab3cd"), 2);
        assert_eq!(word_count("don't"), 2);
        assert_eq!(word_count("one,two;three"), 3);
    }

    #[test]
    fn only_separators_is_zero() {
        assert_eq!(word_count("   \n\t123 !?"), 0);
    }

    #[test]
    fn newline_separated_lines() {
        assert_eq!(word_count("alpha\nbeta\ngamma"), 3);
    }

    #[test]
    fn non_ascii_letters_count() {
        assert_eq!(word_count("café crème"), 2);
    }
}
