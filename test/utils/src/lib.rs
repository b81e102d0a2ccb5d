pub fn ingredients_fixture() -> Vec<&'static str> {
    return vec!["eggs", "tomatoes"];
}

pub fn recipe_fixture() -> &'static str {
    return r#"
Tomato and Egg Scramble

Ingredients:
- 4 eggs
- 2 ripe tomatoes, diced
- Salt and pepper

Steps:
1. Whisk the eggs with a pinch of salt.
2. Soften the tomatoes in a hot pan for 3 minutes.
3. Pour in the eggs and stir gently until just set.

Cooking time: about 10 minutes.

Optional: a handful of chopped chives or some grated parmesan.
"#
    .trim();
}
