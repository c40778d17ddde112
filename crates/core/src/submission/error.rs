use thiserror::Error;

/// Errors that can occur when validating a submission.
///
/// Every variant is field-scoped: it is collected into a
/// [`FieldErrors`](super::FieldErrors) set rather than returned on its own,
/// so one pass reports everything the user has to fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("请输入“鱼越大”")]
    FishBiggerRequired,
    #[error("请输入“鱼越小”")]
    FishSmallerRequired,
    #[error("不能直接提交“{label}”")]
    LabelVerbatim { label: &'static str },
    #[error("“鱼越大”和“鱼越小”不能相同")]
    Identical,
    #[error("必须包含且仅包含一个“越”字")]
    DelimiterCount,
    #[error("“越”字前后必须各为 1 到 10 个字")]
    SegmentBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_error_display() {
        assert_eq!(
            SubmissionError::FishBiggerRequired.to_string(),
            "请输入“鱼越大”"
        );
        assert_eq!(
            SubmissionError::FishSmallerRequired.to_string(),
            "请输入“鱼越小”"
        );
    }

    #[test]
    fn test_label_verbatim_display() {
        let error = SubmissionError::LabelVerbatim { label: "鱼越大" };
        assert_eq!(error.to_string(), "不能直接提交“鱼越大”");
    }

    #[test]
    fn test_delimiter_error_display() {
        assert_eq!(
            SubmissionError::DelimiterCount.to_string(),
            "必须包含且仅包含一个“越”字"
        );
        assert_eq!(
            SubmissionError::SegmentBounds.to_string(),
            "“越”字前后必须各为 1 到 10 个字"
        );
    }
}
