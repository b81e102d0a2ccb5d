use super::Ingredient;
use super::Ingredients;

fn ingredients_of(names: &[&str]) -> Ingredients {
    let mut ingredients = Ingredients::default();
    for name in names {
        ingredients.push(Ingredient::parse(name).unwrap());
    }

    return ingredients;
}

#[test]
fn it_parses_and_trims() {
    let ingredient = Ingredient::parse("  eggs \n").unwrap();
    assert_eq!(ingredient.as_str(), "eggs");
    assert_eq!(ingredient.to_string(), "eggs");
}

#[test]
fn it_keeps_inner_whitespace() {
    let ingredient = Ingredient::parse(" green  onion ").unwrap();
    assert_eq!(ingredient.as_str(), "green  onion");
}

#[test]
fn it_rejects_blank_input() {
    assert_eq!(Ingredient::parse(""), None);
    assert_eq!(Ingredient::parse("   "), None);
    assert_eq!(Ingredient::parse("\t\n "), None);
}

#[test]
fn it_renders_comma_joined() {
    let ingredients = ingredients_of(&["eggs", "tomatoes", "cheese"]);
    assert_eq!(ingredients.to_string(), "eggs,tomatoes,cheese");
}

#[test]
fn it_renders_empty_list() {
    assert_eq!(Ingredients::default().to_string(), "");
}

#[test]
fn it_keeps_duplicates() {
    let ingredients = ingredients_of(&["eggs", "eggs"]);
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients.to_string(), "eggs,eggs");
}

#[test]
fn it_removes_by_position() {
    let mut ingredients = ingredients_of(&["eggs", "tomatoes", "cheese", "basil"]);
    let removed = ingredients.remove(1);

    assert_eq!(removed.unwrap().as_str(), "tomatoes");
    assert_eq!(ingredients.to_string(), "eggs,cheese,basil");
}

#[test]
fn it_ignores_out_of_range_removal() {
    let mut ingredients = ingredients_of(&["eggs", "tomatoes"]);

    assert_eq!(ingredients.remove(2), None);
    assert_eq!(ingredients.remove(usize::MAX), None);
    assert_eq!(ingredients.to_string(), "eggs,tomatoes");
}

#[test]
fn it_iterates_in_insertion_order() {
    let ingredients = ingredients_of(&["rice", "beans", "corn"]);
    let names = ingredients
        .iter()
        .map(|ingredient| {
            return ingredient.as_str();
        })
        .collect::<Vec<&str>>();

    assert_eq!(names, vec!["rice", "beans", "corn"]);
    assert_eq!(ingredients.last().unwrap().as_str(), "corn");
}
