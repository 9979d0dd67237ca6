use std::fmt::Write;

use crate::domain::recipe::entities::Profile;

const PERSONA: &str = "You are a natural cosmetic formulator and herbal beauty expert. \
You write with a gentle, encouraging and warm voice.";

const REQUIREMENTS: &str = "\
Requirements:
- Use only natural ingredients that are easy to find at home or in a grocery store
- Never combine ingredients that are unsafe together
- Give the product a distinctive, graceful name
- Provide:
  1. Product name
  2. Ingredients with exact measurements
  3. Why each ingredient helps, one short explanation per ingredient
  4. Preparation instructions as ordered steps
  5. How to apply the product
  6. How often to use it
  7. Safety warnings, phrased gently, or an empty value if none are needed";

const TONE: &str = "Keep the tone warm and reassuring. \
Do not make clinical or medical claims and avoid harsh language.";

/// Builds the recipe prompt for a profile.
///
/// The four core attributes are always rendered, even when blank. The two
/// free-text fields are only rendered when they carry content.
pub fn build_recipe_prompt(profile: &Profile) -> String {
    let mut prompt = String::with_capacity(1024);

    prompt.push_str(PERSONA);
    prompt.push_str("\n\nCreate a safe, homemade beauty recipe for the following profile:\n\n");

    let _ = writeln!(prompt, "Hair Type: {}", profile.hair_type);
    let _ = writeln!(prompt, "Skin Type: {}", profile.skin_type);
    let _ = writeln!(prompt, "Current Condition: {}", profile.condition);
    let _ = writeln!(prompt, "Goal: {}", profile.goal);

    if let Some(detail) = non_blank(&profile.detailed_condition) {
        let _ = writeln!(prompt, "Condition Details: {detail}");
    }
    if let Some(goals) = non_blank(&profile.personal_goals) {
        let _ = writeln!(prompt, "Personal Goals: {goals}");
    }

    prompt.push('\n');
    prompt.push_str(REQUIREMENTS);
    prompt.push_str("\n\n");
    prompt.push_str(TONE);

    prompt
}

/// Presence is judged on the trimmed text; the user's text is substituted as typed.
fn non_blank(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}
