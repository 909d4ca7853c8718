use serde_json::{json, Value};

use crate::quiz_engine::models::QuestionSpec;

/// Presentation-layer key for a level, e.g. `"level-48"`.
fn level_key(spec: &QuestionSpec) -> String {
    format!("level-{}", spec.level.get())
}

/// Build the structured result block the quiz page uses for answer telemetry.
fn result_block(spec: &QuestionSpec) -> Value {
    serde_json::to_value(spec.result).unwrap_or(Value::Null)
}

/// Convert a generated question into the JSON shape the browser quiz page
/// consumes: `question`, `correctAnswer` and `options` as rendered markup,
/// plus the level and skill family it came from.
pub fn to_client_payload(spec: &QuestionSpec) -> Value {
    json!({
        "question": spec.question,
        "correctAnswer": spec.correct_answer,
        "options": spec.options.as_slice(),
        "level": spec.level.get(),
        "levelKey": level_key(spec),
        "family": spec.family,
        "familyTitle": spec.family.to_string(),
        "result": result_block(spec),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{generate_question, QuizRequest};

    #[test]
    fn payload_uses_client_keys() {
        let spec = generate_question(QuizRequest::new(48).with_seed(9));
        let payload = to_client_payload(&spec);
        assert_eq!(payload["correctAnswer"], spec.correct_answer.as_str());
        assert_eq!(payload["options"].as_array().map(Vec::len), Some(4));
        assert_eq!(payload["level"], 48);
        assert_eq!(payload["levelKey"], "level-48");
        assert_eq!(payload["family"], "DifferenceOfSquares");
        assert_eq!(payload["familyTitle"], "Difference of Squares");
        assert_eq!(payload["result"]["Quadratic"]["term1_exponent"], 2);
    }
}
