#[cfg(test)]
mod tests {
    use paprika_notes::config::{CategoryAlias, ConverterConfig};
    use paprika_notes::model::RawRecipe;
    use paprika_notes::normalize::{
        normalize_ingredient, normalize_instructions, normalize_title, Normalizer, UNTITLED,
    };
    use paprika_notes::parse_recipe;

    const PAPRIKA_EXPORT: &str = include_str!("fixtures/paprika_chili.html");

    #[test]
    fn test_title_prefixes_removed() {
        assert_eq!(normalize_title("12. Chili"), "Chili");
        assert_eq!(normalize_title("Recipe: Beef Stew"), "Beef Stew");
        assert_eq!(normalize_title("3) recipe: pot roast"), "Pot Roast");
        assert_eq!(normalize_title("7-Layer Dip"), "7-Layer Dip");
        assert_eq!(normalize_title("1. 2. Nested"), "Nested");
        assert_eq!(normalize_title("1. Recipe: Soup"), "Soup");
    }

    #[test]
    fn test_one_step_per_sentence() {
        let steps = normalize_instructions("Preheat the oven. Mix the batter. Bake for 20 minutes.");
        assert_eq!(
            steps,
            vec!["Preheat the oven.", "Mix the batter.", "Bake for 20 minutes."]
        );
    }

    #[test]
    fn test_numbered_block() {
        let steps = normalize_instructions("1. Chop the onion. 2. Fry it\n3) Serve");
        assert_eq!(steps, vec!["Chop the onion.", "Fry it.", "Serve."]);
    }

    #[test]
    fn test_mixed_fraction() {
        assert_eq!(normalize_ingredient("1 1/2 cups flour"), "1½ cups flour");
        assert_eq!(normalize_ingredient("1 1/2 c flour"), "1½ cups flour");
        assert_eq!(normalize_ingredient("½ tsp  salt"), "½ teaspoon salt");
    }

    #[test]
    fn test_rules_are_idempotent() {
        for title in [
            "12. Chili",
            "MACARONI AND CHEESE",
            "the best pie ever",
            "mac & CHEESE",
            "1. Recipe: Soup",
            "ab BBQ",
        ] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once);
        }

        for line in [
            "1 1/2 cups flour",
            "8oz cream cheese",
            "2 T butter",
            "3/16 cup water",
            "2.1 lb beef",
        ] {
            let once = normalize_ingredient(line);
            assert_eq!(normalize_ingredient(&once), once);
        }

        let steps = normalize_instructions("1.5 hours before serving, take the roast out.");
        assert_eq!(steps, vec!["1.5 hours before serving, take the roast out."]);

        let block = "1. Boil water. Add pasta.\n2. Drain (e.g. in a colander). Serve!";
        let once = normalize_instructions(block);
        let again = normalize_instructions(&once.join("\n"));
        assert_eq!(again, once);
    }

    #[test]
    fn test_paprika_export_normalized() {
        let recipe = parse_recipe("12_Chili.html", PAPRIKA_EXPORT).unwrap();

        assert_eq!(recipe.title, "Chili");
        assert_eq!(
            recipe.ingredients,
            vec![
                "2 pounds ground beef",
                "1½ cups kidney beans",
                "1 tablespoon chili powder"
            ]
        );
        assert_eq!(
            recipe.instructions,
            vec![
                "Brown the beef in a large pot.",
                "Drain the fat.",
                "Add the beans and chili powder.",
                "Simmer for 1 hr."
            ]
        );
        assert_eq!(
            recipe.notes.as_deref(),
            Some("Freezes well.\n\nBetter the next day.")
        );
        assert_eq!(recipe.nutrition, vec!["Calories: 350", "Fat: 12 g"]);
        assert_eq!(recipe.categories, vec!["Dinner", "Soups"]);
        assert_eq!(recipe.prep_time.as_deref(), Some("15 minutes"));
        assert_eq!(recipe.cook_time.as_deref(), Some("1 hour"));
        assert_eq!(recipe.servings.as_deref(), Some("6"));
        assert_eq!(recipe.source_url.as_deref(), Some("https://example.com/chili"));
        assert_eq!(recipe.source_name.as_deref(), Some("Example Kitchen"));
    }

    #[test]
    fn test_title_falls_back_to_filename() {
        let raw = RawRecipe {
            ingredients: vec!["1 cup rice".to_string()],
            ..Default::default()
        };

        let recipe = Normalizer::default().normalize(raw, "fried_rice.html");
        assert_eq!(recipe.title, "Fried Rice");

        let recipe = Normalizer::default().normalize(RawRecipe::default(), "");
        assert_eq!(recipe.title, UNTITLED);
    }

    #[test]
    fn test_configured_category_aliases() {
        let config = ConverterConfig {
            category_aliases: vec![CategoryAlias {
                pattern: "weeknight".to_string(),
                name: "Quick Dinners".to_string(),
            }],
            ..Default::default()
        };
        let normalizer = Normalizer::new(&config);

        assert_eq!(
            normalizer.categories("weeknight meals, Crockpot Recipes, dessert, Dessert"),
            vec!["Crockpot", "Dessert", "Quick Dinners"]
        );
    }
}
