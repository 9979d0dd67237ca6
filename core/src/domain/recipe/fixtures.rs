use mockall::Sequence;

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::MockLLMClient};

pub fn sample_recipe_json(product_name: &str) -> String {
    serde_json::json!({
        "productName": product_name,
        "ingredients": [
            { "name": "Aloe vera gel", "amount": "2 tbsp", "benefit": "Calms and hydrates" },
            { "name": "Argan oil", "amount": "1 tsp", "benefit": "Smooths frizz" }
        ],
        "preparation": ["Whisk the gel", "Fold in the oil"],
        "application": "Work through damp hair from mid-length to ends.",
        "frequency": "Twice a week",
        "warnings": ""
    })
    .to_string()
}

/// Expects exactly one call for `model`, in `seq` order, answering with `reply`.
pub fn expect_call(
    client: &mut MockLLMClient,
    seq: &mut Sequence,
    model: &'static str,
    reply: Result<String, CoreError>,
) {
    client
        .expect_generate()
        .withf(move |request| request.model == model)
        .times(1)
        .in_sequence(seq)
        .returning(move |_| {
            let reply = reply.clone();
            Box::pin(async move { reply })
        });
}

pub fn expect_success(
    client: &mut MockLLMClient,
    seq: &mut Sequence,
    model: &'static str,
    output: &str,
) {
    expect_call(client, seq, model, Ok(output.to_string()));
}

pub fn expect_failure(
    client: &mut MockLLMClient,
    seq: &mut Sequence,
    model: &'static str,
    message: &str,
) {
    expect_call(
        client,
        seq,
        model,
        Err(CoreError::ExternalServiceError(message.to_string())),
    );
}
