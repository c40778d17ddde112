use std::ops::RangeInclusive;

use super::error::SubmissionError;
use super::types::{Field, FieldErrors, Submission, LABEL_FISH_BIGGER, LABEL_FISH_SMALLER};

/// The pivot character both inputs must contain exactly once.
pub const DELIMITER: char = '越';

/// Inclusive bounds, in characters, for the text on each side of the pivot.
const SEGMENT_BOUNDS: RangeInclusive<usize> = 1..=10;

/// Semantic checks on a submission that already passed the presence checks.
///
/// Pure function, no side effects. All rules are evaluated and every
/// failure is collected, so the caller gets the complete error set in one
/// pass:
///
/// 1. neither value may be its own field label,
/// 2. the two values must differ,
/// 3. each value must contain [`DELIMITER`] exactly once,
/// 4. the text on each side of the delimiter must be 1 to 10 characters.
///
/// Rule 4 is only meaningful once rule 3 holds for that field, so it is
/// skipped for a field whose delimiter count is wrong.
pub fn check_rules(submission: &Submission) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if submission.fish_bigger == LABEL_FISH_BIGGER {
        errors.push(
            Field::FishBigger,
            SubmissionError::LabelVerbatim {
                label: LABEL_FISH_BIGGER,
            },
        );
    }
    if submission.fish_smaller == LABEL_FISH_SMALLER {
        errors.push(
            Field::FishSmaller,
            SubmissionError::LabelVerbatim {
                label: LABEL_FISH_SMALLER,
            },
        );
    }

    if submission.fish_bigger == submission.fish_smaller {
        errors.push(Field::Form, SubmissionError::Identical);
    }

    check_delimited(&submission.fish_bigger, Field::FishBigger, &mut errors);
    check_delimited(&submission.fish_smaller, Field::FishSmaller, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_delimited(value: &str, field: Field, errors: &mut FieldErrors) {
    if value.chars().filter(|c| *c == DELIMITER).count() != 1 {
        errors.push(field, SubmissionError::DelimiterCount);
        return;
    }

    let Some((left, right)) = value.split_once(DELIMITER) else {
        return;
    };

    // Character counts, not byte lengths: the inputs are CJK text.
    if !SEGMENT_BOUNDS.contains(&left.chars().count())
        || !SEGMENT_BOUNDS.contains(&right.chars().count())
    {
        errors.push(field, SubmissionError::SegmentBounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(fish_bigger: &str, fish_smaller: &str) -> Submission {
        Submission {
            fish_bigger: fish_bigger.to_string(),
            fish_smaller: fish_smaller.to_string(),
        }
    }

    // Valid submissions

    #[test]
    fn accepts_well_formed_pair() {
        assert!(check_rules(&submission("奶酪越多", "奶酪越少")).is_ok());
    }

    #[test]
    fn accepts_segments_at_the_bounds() {
        // One character on the left, ten on the right.
        assert!(check_rules(&submission("雨越哗啦哗啦哗啦哗啦哗啦", "风越大")).is_ok());
    }

    // Label rule

    #[test]
    fn rejects_fish_bigger_label_itself() {
        let errors = check_rules(&submission("鱼越大", "天越黑")).unwrap_err();
        assert_eq!(errors.fish_bigger, vec!["不能直接提交“鱼越大”"]);
    }

    #[test]
    fn rejects_fish_smaller_label_itself() {
        let errors = check_rules(&submission("天越黑", "鱼越小")).unwrap_err();
        assert_eq!(errors.fish_smaller, vec!["不能直接提交“鱼越小”"]);
    }

    #[test]
    fn accepts_swapped_labels() {
        // Only the field's own label is guarded against.
        assert!(check_rules(&submission("鱼越小", "鱼越大")).is_ok());
    }

    // Identity rule

    #[test]
    fn rejects_identical_values_at_form_scope() {
        let errors = check_rules(&submission("大鱼越多刺", "大鱼越多刺")).unwrap_err();
        assert_eq!(errors.form, vec!["“鱼越大”和“鱼越小”不能相同"]);
        assert!(errors.fish_bigger.is_empty());
        assert!(errors.fish_smaller.is_empty());
    }

    // Delimiter rule

    #[test]
    fn rejects_value_without_delimiter() {
        let errors = check_rules(&submission("大鱼多刺", "天越黑")).unwrap_err();
        assert_eq!(errors.fish_bigger, vec!["必须包含且仅包含一个“越”字"]);
    }

    #[test]
    fn rejects_value_with_two_delimiters() {
        let errors = check_rules(&submission("鱼越来越大", "天越黑")).unwrap_err();
        assert_eq!(errors.fish_bigger, vec!["必须包含且仅包含一个“越”字"]);
    }

    #[test]
    fn segment_rule_is_skipped_when_delimiter_rule_fails() {
        // No delimiter at all: only the delimiter error is reported.
        let errors = check_rules(&submission("鱼", "天越黑")).unwrap_err();
        assert_eq!(errors.fish_bigger.len(), 1);
    }

    // Segment bounds rule

    #[test]
    fn rejects_empty_left_segment() {
        let errors = check_rules(&submission("越大", "天越黑")).unwrap_err();
        assert_eq!(errors.fish_bigger, vec!["“越”字前后必须各为 1 到 10 个字"]);
    }

    #[test]
    fn rejects_empty_right_segment() {
        let errors = check_rules(&submission("天越黑", "鱼越")).unwrap_err();
        assert_eq!(errors.fish_smaller, vec!["“越”字前后必须各为 1 到 10 个字"]);
    }

    #[test]
    fn rejects_segment_longer_than_ten_characters() {
        // Eleven characters on the right of the pivot.
        let errors = check_rules(&submission("雨越哗啦哗啦哗啦哗啦哗啦啦", "风越大")).unwrap_err();
        assert_eq!(errors.fish_bigger, vec!["“越”字前后必须各为 1 到 10 个字"]);
    }

    #[test]
    fn segment_bounds_count_characters_not_bytes() {
        // Four CJK characters are twelve bytes but still within bounds.
        assert!(check_rules(&submission("鲸鱼鲨鱼越大", "天越黑")).is_ok());
    }

    // Error aggregation

    #[test]
    fn collects_errors_across_rules_and_fields() {
        let errors = check_rules(&submission("大鱼多刺", "大鱼多刺")).unwrap_err();
        assert_eq!(errors.form, vec!["“鱼越大”和“鱼越小”不能相同"]);
        assert_eq!(errors.fish_bigger, vec!["必须包含且仅包含一个“越”字"]);
        assert_eq!(errors.fish_smaller, vec!["必须包含且仅包含一个“越”字"]);
    }

    #[test]
    fn collects_multiple_errors_on_one_field() {
        // The label itself also trips the identity rule when repeated.
        let errors = check_rules(&submission("鱼越大", "鱼越大")).unwrap_err();
        assert_eq!(errors.fish_bigger, vec!["不能直接提交“鱼越大”"]);
        assert_eq!(errors.form, vec!["“鱼越大”和“鱼越小”不能相同"]);
    }
}
