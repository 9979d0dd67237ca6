use crate::domain::common::entities::app_errors::CoreError;

/// Maps a failed generation to the error the caller sees.
///
/// Exhaustion whose recorded failures mention one of `billing_phrases`
/// becomes `ProviderVerificationRequired`, whichever candidate raised it.
/// Phrase matching is a plain case-sensitive substring check.
pub fn classify_generation_error(error: CoreError, billing_phrases: &[String]) -> CoreError {
    let billing_hit = match &error {
        CoreError::NoModelAvailable { failures, .. } => failures
            .iter()
            .find(|f| mentions_billing(&f.message, billing_phrases))
            .map(|f| f.message.clone()),
        CoreError::ExternalServiceError(message) | CoreError::InvalidResponse(message) => {
            mentions_billing(message, billing_phrases).then(|| message.clone())
        }
        _ => None,
    };

    match billing_hit {
        Some(detail) => CoreError::ProviderVerificationRequired(detail),
        None => error,
    }
}

fn mentions_billing(message: &str, billing_phrases: &[String]) -> bool {
    billing_phrases
        .iter()
        .any(|phrase| !phrase.is_empty() && message.contains(phrase.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{common::DEFAULT_BILLING_PHRASES, recipe::entities::ModelFailure};

    fn phrases() -> Vec<String> {
        DEFAULT_BILLING_PHRASES.iter().map(|p| p.to_string()).collect()
    }

    fn exhausted(messages: &[&str]) -> CoreError {
        let failures: Vec<ModelFailure> = messages
            .iter()
            .enumerate()
            .map(|(i, m)| ModelFailure {
                model: format!("model-{i}"),
                message: m.to_string(),
            })
            .collect();
        let last_error = failures.last().map(|f| f.message.clone()).unwrap_or_default();
        CoreError::NoModelAvailable {
            failures,
            last_error,
        }
    }

    #[test]
    fn test_quota_on_any_candidate_requires_verification() {
        let err = exhausted(&[
            "429 Resource has been exhausted (e.g. check quota).",
            "404 models/gemini-1.5 is not found",
        ]);

        let classified = classify_generation_error(err, &phrases());

        assert_eq!(
            classified,
            CoreError::ProviderVerificationRequired(
                "429 Resource has been exhausted (e.g. check quota).".to_string()
            )
        );
    }

    #[test]
    fn test_credit_card_message_requires_verification() {
        let err = exhausted(&["AI Gateway requires a valid credit card on file"]);
        let classified = classify_generation_error(err, &phrases());
        assert!(matches!(classified, CoreError::ProviderVerificationRequired(_)));
    }

    #[test]
    fn test_unrelated_failures_stay_exhausted() {
        let err = exhausted(&["connection refused", "500 internal"]);
        let classified = classify_generation_error(err.clone(), &phrases());
        assert_eq!(classified, err);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let err = exhausted(&["QUOTA EXCEEDED"]);
        let classified = classify_generation_error(err, &phrases());
        assert!(matches!(classified, CoreError::NoModelAvailable { .. }));
    }

    #[test]
    fn test_configured_phrases_replace_defaults() {
        let err = exhausted(&["account suspended pending review"]);
        let classified = classify_generation_error(err, &["suspended".to_string()]);
        assert!(matches!(classified, CoreError::ProviderVerificationRequired(_)));
    }

    #[test]
    fn test_missing_credential_is_untouched() {
        let classified = classify_generation_error(CoreError::MissingCredential, &phrases());
        assert_eq!(classified, CoreError::MissingCredential);
    }
}
