//! Prompt builder for the item-inference collaborator.
//!
//! Builds a `(system_msg, user_msg)` pair for any OpenAI-compatible
//! `/v1/chat/completions` endpoint.  The prompt asks the model to read a
//! messy spoken food order and answer with a single JSON object mapping
//! item names to integer quantities — nothing else.

// ---------------------------------------------------------------------------
// System instruction
// ---------------------------------------------------------------------------

const SYSTEM_INSTRUCTION: &str = "\
You are an expert at reading messy food orders and extracting structured data.
Given a transcript, extract all food items and their quantities.

Rules:
1. Output a single valid JSON object mapping item name to integer quantity.
2. No explanation, no markdown — only the JSON object.
3. Misspellings are common; correct them using your knowledge.
4. When an item has no spoken quantity, use 1.";

// ---------------------------------------------------------------------------
// Few-shot examples
// ---------------------------------------------------------------------------

const FEW_SHOT_EXAMPLES: &str = "
Examples:
Input: \"3 momozz, 2 vege pizaa, 1 briyani\"
Output: {\"Momos\": 3, \"Veg Pizza\": 2, \"Biryani\": 1}

Input: \"1 chiken burger and 4 veg momos\"
Output: {\"Chicken Burger\": 1, \"Veg Momos\": 4}

Input: \"2 chicken juicy burger 5 veg pizza 7 burrito and 66 veg momos\"
Output: {\"Chicken Juicy Burger\": 2, \"Veg Pizza\": 5, \"Burrito\": 7, \"Veg Momos\": 66}

Input: \"Veg sandwich, 4 veg pizza, 18 burritos\"
Output: {\"Veg Sandwich\": 1, \"Veg Pizza\": 4, \"Burritos\": 18}
";

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds the order-extraction prompt in chat-message format.
///
/// # Example
/// ```rust
/// use quickorder::remote::PromptBuilder;
///
/// let builder = PromptBuilder::new();
/// let (system, user) = builder.build_chat("2 chiken burgers");
/// assert!(system.contains("JSON object"));
/// assert!(user.contains("2 chiken burgers"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a **(system_msg, user_msg)** pair.
    ///
    /// * `system_msg` — extraction rules.
    /// * `user_msg` — few-shot examples + the transcript + the output cue.
    pub fn build_chat(&self, transcript: &str) -> (String, String) {
        let system_msg = SYSTEM_INSTRUCTION.to_string();

        let mut user_msg = String::with_capacity(1024);
        user_msg.push_str(FEW_SHOT_EXAMPLES);
        user_msg.push_str(&format!("\nInput: \"{}\"\nOutput: ", transcript));

        (system_msg, user_msg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_demands_json_only() {
        let (system, _) = PromptBuilder::new().build_chat("2 veg momos");
        assert!(system.contains("JSON object"));
        assert!(system.contains("No explanation"));
        assert!(system.contains("Misspellings"));
    }

    #[test]
    fn user_msg_contains_few_shot_examples() {
        let (_, user) = PromptBuilder::new().build_chat("test");
        assert!(user.contains("Examples:"));
        assert!(user.contains(r#"{"Momos": 3, "Veg Pizza": 2, "Biryani": 1}"#));
    }

    #[test]
    fn user_msg_embeds_transcript_and_cue() {
        let transcript = "2 chiken burger and 4 veg momos";
        let (_, user) = PromptBuilder::new().build_chat(transcript);
        assert!(user.contains(transcript));
        assert!(user.trim_end().ends_with("Output:"));
    }

    #[test]
    fn default_quantity_rule_is_stated() {
        let (system, _) = PromptBuilder::new().build_chat("veg sandwich");
        assert!(system.contains("use 1"));
    }
}
