use super::GenerationParameters;
use super::RecipePrompt;
use crate::domain::models::Ingredient;
use crate::domain::models::Ingredients;

fn prompt_for(names: &[&str]) -> RecipePrompt {
    let mut ingredients = Ingredients::default();
    for name in names {
        ingredients.push(Ingredient::parse(name).unwrap());
    }

    return RecipePrompt::new(&ingredients);
}

#[test]
fn it_builds_instruction_prompt() {
    let prompt = prompt_for(&["eggs", "tomatoes"]);

    insta::assert_snapshot!(prompt.text, @r###"
    [INST] I have these ingredients: eggs,tomatoes.
    Please suggest a simple, delicious recipe I can make.
    Include cooking steps, approximate cooking time, and any optional ingredients that would enhance the dish. [/INST]
    "###);
}

#[test]
fn it_keeps_ingredient_order() {
    let prompt = prompt_for(&["tomatoes", "eggs", "basil"]);
    assert!(prompt.text.contains("ingredients: tomatoes,eggs,basil."));
}

#[test]
fn it_uses_default_parameters() {
    let prompt = prompt_for(&["eggs"]);
    assert_eq!(
        prompt.parameters,
        GenerationParameters {
            max_new_tokens: 512,
            temperature: 0.7,
            top_p: 0.9,
            return_full_text: false,
        }
    );
}

#[test]
fn it_strips_prompt_echo() {
    let prompt = prompt_for(&["eggs", "tomatoes"]);
    let generated = format!("{} Omelette recipe...", prompt.text);

    assert_eq!(prompt.strip_echo(&generated), "Omelette recipe...");
}

#[test]
fn it_strips_only_first_echo() {
    let prompt = prompt_for(&["eggs"]);
    let generated = format!("{}\n\nStep 1.\n{}", prompt.text, prompt.text);

    assert_eq!(prompt.strip_echo(&generated), format!("Step 1.\n{}", prompt.text));
}

#[test]
fn it_trims_without_echo() {
    let prompt = prompt_for(&["eggs"]);
    assert_eq!(prompt.strip_echo("\n  Scrambled eggs.  \n"), "Scrambled eggs.");
}

#[test]
fn it_strips_to_empty() {
    let prompt = prompt_for(&["eggs"]);
    assert_eq!(prompt.strip_echo(&format!("  {}  ", prompt.text)), "");
}
