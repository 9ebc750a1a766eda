// src/utils/verify.rs

use validator::ValidationErrors;

/// Picks the message of the first violated field, walking `order` first and
/// falling back to whatever else failed.
pub fn first_violation(errors: &ValidationErrors, order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .chain(field_errors.values())
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn follows_the_given_order() {
        let mut errors = ValidationErrors::new();
        errors.add("answer", ValidationError::new("length").with_message("Answer值不能为空".into()));
        errors.add("question", ValidationError::new("length").with_message("Question值不能为空".into()));

        assert_eq!(first_violation(&errors, &["question", "answer"]), "Question值不能为空");
        assert_eq!(first_violation(&errors, &["answer", "question"]), "Answer值不能为空");
    }

    #[test]
    fn unlisted_fields_still_report() {
        let mut errors = ValidationErrors::new();
        errors.add("extra", ValidationError::new("length").with_message("Extra值不能为空".into()));

        assert_eq!(first_violation(&errors, &["question"]), "Extra值不能为空");
    }
}
