#[cfg(test)]
mod tests {
    use paprika_notes::{BatchConverter, ConvertError, ConverterConfig, ExtractionError};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const PAPRIKA_EXPORT: &str = include_str!("fixtures/paprika_chili.html");

    fn recipe_html(title: &str, category: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>{title}</title></head>
<body>
<div class="recipe" itemscope itemtype="http://schema.org/Recipe">
  <h1 itemprop="name">{title}</h1>
  <p itemprop="recipeCategory">{category}</p>
  <p class="line" itemprop="recipeIngredient">1 cup water</p>
  <div itemprop="recipeInstructions"><p class="line">Stir well.</p></div>
</div>
</body></html>"#
        )
    }

    fn export_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Chili.html"), PAPRIKA_EXPORT).unwrap();
        fs::write(dir.path().join("Apple Pie.html"), recipe_html("Apple Pie", "Desserts")).unwrap();
        fs::write(dir.path().join("Beef Stew.html"), recipe_html("beef stew", "Dinner")).unwrap();
        // Not UTF-8
        fs::write(dir.path().join("Broken.html"), [0xff, 0xfe, 0x00, 0x3c]).unwrap();
        // Paprika's own listing page and a photo
        fs::write(dir.path().join("index.html"), recipe_html("All Recipes", "")).unwrap();
        fs::write(dir.path().join("photo.jpg"), [0u8; 16]).unwrap();
        dir
    }

    fn converter(input: &Path, output: &Path) -> BatchConverter {
        BatchConverter::builder()
            .input_dir(input)
            .output_dir(output)
            .build()
            .unwrap()
    }

    #[test]
    fn test_converts_export_directory() {
        let input = export_dir();
        let output = tempfile::tempdir().unwrap();

        let report = converter(input.path(), output.path()).run().unwrap();

        assert!(report.is_success());
        assert_eq!(report.processed(), 3);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].path.ends_with("Broken.html"));
        assert!(matches!(report.skipped[0].error, ExtractionError::Encoding));

        for name in ["Apple_Pie.html", "Beef_Stew.html", "Chili.html"] {
            assert!(output.path().join(name).is_file(), "missing {name}");
        }

        let chili = fs::read_to_string(output.path().join("Chili.html")).unwrap();
        assert!(chili.contains("<h1>Chili</h1>"));
        assert!(chili.contains("<li>1½ cups kidney beans</li>"));
        assert!(chili.contains("<li value=\"4\">Simmer for 1 hr.</li>"));

        let index_path = report.index_path.unwrap();
        assert_eq!(
            index_path,
            output
                .path()
                .join(ConverterConfig::default().index_filename)
        );
        let index = fs::read_to_string(index_path).unwrap();
        assert!(index.contains("<strong>Total Recipes:</strong> 3"));
        assert!(index.contains("href=\"Apple_Pie.html\""));
        assert!(index.contains("href=\"Beef_Stew.html\""));
        assert!(index.contains("href=\"Chili.html\""));
        assert!(!index.contains("Broken"));
        assert!(!index.contains("All Recipes"));
    }

    #[test]
    fn test_duplicate_titles_get_suffixes() {
        let input = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.html"), recipe_html("Pancakes", "Breakfast")).unwrap();
        fs::write(input.path().join("b.html"), recipe_html("2. Pancakes", "Breakfast")).unwrap();
        fs::write(input.path().join("c.html"), recipe_html("PANCAKES", "Breakfast")).unwrap();
        let output = tempfile::tempdir().unwrap();

        let report = converter(input.path(), output.path()).run().unwrap();

        assert_eq!(report.processed(), 3);
        for name in ["Pancakes.html", "Pancakes_2.html", "Pancakes_3.html"] {
            assert!(output.path().join(name).is_file(), "missing {name}");
        }

        let index = fs::read_to_string(report.index_path.unwrap()).unwrap();
        assert!(index.contains("<li>Breakfast (3)</li>"));
    }

    #[test]
    fn test_long_multibyte_title_is_written() {
        let input = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.html"), recipe_html("Toast", "Breakfast")).unwrap();
        fs::write(input.path().join("b.html"), recipe_html(&"麻".repeat(95), "Dinner")).unwrap();
        let output = tempfile::tempdir().unwrap();

        let report = converter(input.path(), output.path()).run().unwrap();

        assert_eq!(report.processed(), 2);
        for path in &report.written {
            assert!(path.is_file());
            assert!(path.file_name().unwrap().len() < 255);
        }
    }

    #[test]
    fn test_index_lists_before_recipes() {
        let input = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.html"), recipe_html("00 Apple Cake", "Baking")).unwrap();
        fs::write(input.path().join("b.html"), recipe_html("000", "Baking")).unwrap();
        let output = tempfile::tempdir().unwrap();

        let report = converter(input.path(), output.path()).run().unwrap();

        let index_name = report
            .index_path
            .as_ref()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .to_lowercase();
        assert_eq!(report.processed(), 2);
        for path in &report.written {
            let name = path.file_name().unwrap().to_string_lossy().to_lowercase();
            assert!(name > index_name, "{name} lists before the index");
        }
    }

    #[test]
    fn test_output_inside_input_is_not_reread() {
        let input = export_dir();
        let output = input.path().join("notes");

        let first = converter(input.path(), &output).run().unwrap();
        let second = converter(input.path(), &output).run().unwrap();

        assert_eq!(first.processed(), 3);
        assert_eq!(second.processed(), 3);
        assert!(!output.join("Chili_2.html").exists());
    }

    #[test]
    fn test_missing_input_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = converter(&dir.path().join("nope"), &dir.path().join("out")).run();

        assert!(matches!(result, Err(ConvertError::InputNotFound(_))));
    }

    #[test]
    fn test_nothing_convertible() {
        let input = tempfile::tempdir().unwrap();
        fs::write(input.path().join("empty.html"), "   ").unwrap();
        fs::write(input.path().join("blank.html"), "<html><body></body></html>").unwrap();
        let output = tempfile::tempdir().unwrap();

        let report = converter(input.path(), output.path()).run().unwrap();

        assert!(!report.is_success());
        assert_eq!(report.skipped.len(), 2);
        let index = fs::read_to_string(report.index_path.unwrap()).unwrap();
        assert!(index.contains("<strong>Total Recipes:</strong> 0"));
    }
}
