//! Category display formatting

use crate::models::Category;

/// Format the category table as aligned columns
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let id_width = categories
        .iter()
        .map(|c| c.id.len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  {}\n", "ID", "Category", width = id_width));
    output.push_str(&format!("{:-<width$}  {:-<16}\n", "", "", width = id_width));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            category.id,
            category.name,
            width = id_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATEGORIES;

    #[test]
    fn test_lists_every_category() {
        let output = format_category_list(CATEGORIES);
        for category in CATEGORIES {
            assert!(output.contains(category.id));
            assert!(output.contains(category.name));
        }
        assert!(output.starts_with("ID"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_category_list(&[]), "No categories found.");
    }
}
