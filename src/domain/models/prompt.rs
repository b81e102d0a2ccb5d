#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;

use serde::Serialize;

use super::Ingredients;

/// Sampling settings sent alongside every prompt.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> GenerationParameters {
        return GenerationParameters {
            max_new_tokens: 512,
            temperature: 0.7,
            top_p: 0.9,
            return_full_text: false,
        };
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecipePrompt {
    pub text: String,
    pub parameters: GenerationParameters,
}

impl RecipePrompt {
    pub fn new(ingredients: &Ingredients) -> RecipePrompt {
        let text = format!(
            "[INST] I have these ingredients: {ingredients}.\n\
             Please suggest a simple, delicious recipe I can make.\n\
             Include cooking steps, approximate cooking time, and any optional ingredients that would enhance the dish. [/INST]"
        );

        return RecipePrompt {
            text,
            parameters: GenerationParameters::default(),
        };
    }

    /// Models occasionally echo the instruction back before answering. Drops
    /// the first exact copy of the prompt and trims what remains.
    pub fn strip_echo(&self, generated: &str) -> String {
        return generated.replacen(&self.text, "", 1).trim().to_string();
    }
}
