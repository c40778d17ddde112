use super::error::SubmissionError;
use super::types::{Field, FieldErrors, RawSubmission, Submission};

/// Checks that both fields are present and non-empty.
///
/// Both fields are checked independently, so a request missing both reports
/// one error per field in a single result. Values that pass are carried into
/// the [`Submission`] verbatim.
pub fn validate(raw: &RawSubmission) -> Result<Submission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let fish_bigger = raw.fish_bigger.as_deref().unwrap_or("");
    let fish_smaller = raw.fish_smaller.as_deref().unwrap_or("");

    if fish_bigger.is_empty() {
        errors.push(Field::FishBigger, SubmissionError::FishBiggerRequired);
    }
    if fish_smaller.is_empty() {
        errors.push(Field::FishSmaller, SubmissionError::FishSmallerRequired);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Submission {
        fish_bigger: fish_bigger.to_string(),
        fish_smaller: fish_smaller.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fish_bigger: Option<&str>, fish_smaller: Option<&str>) -> RawSubmission {
        RawSubmission {
            fish_bigger: fish_bigger.map(String::from),
            fish_smaller: fish_smaller.map(String::from),
        }
    }

    #[test]
    fn accepts_two_populated_fields() {
        let submission = validate(&raw(Some("鱼越大"), Some("天越黑"))).unwrap();
        assert_eq!(submission.fish_bigger, "鱼越大");
        assert_eq!(submission.fish_smaller, "天越黑");
    }

    #[test]
    fn values_are_carried_verbatim_without_trimming() {
        let submission = validate(&raw(Some("  鱼越大  "), Some("天越黑"))).unwrap();
        assert_eq!(submission.fish_bigger, "  鱼越大  ");
    }

    #[test]
    fn rejects_missing_fish_bigger() {
        let errors = validate(&raw(None, Some("天越黑"))).unwrap_err();
        assert_eq!(errors.fish_bigger, vec!["请输入“鱼越大”"]);
        assert!(errors.fish_smaller.is_empty());
    }

    #[test]
    fn rejects_empty_fish_smaller() {
        let errors = validate(&raw(Some("鱼越大"), Some(""))).unwrap_err();
        assert_eq!(errors.fish_smaller, vec!["请输入“鱼越小”"]);
    }

    #[test]
    fn rejects_both_fields_with_one_error_each() {
        let errors = validate(&raw(Some(""), None)).unwrap_err();
        assert_eq!(errors.fish_bigger, vec!["请输入“鱼越大”"]);
        assert_eq!(errors.fish_smaller, vec!["请输入“鱼越小”"]);
        assert!(errors.form.is_empty());
    }

    #[test]
    fn whitespace_only_passes_the_presence_check() {
        // Presence is the only schema rule; whitespace is left to the
        // business rules to reject via the delimiter check.
        assert!(validate(&raw(Some(" "), Some(" "))).is_ok());
    }
}
