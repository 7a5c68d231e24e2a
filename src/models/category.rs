use crate::search::contains_ignore_case;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub part_count: u32,
    pub subcategories: Vec<String>,
    pub featured: bool,
}

/// Compact category tile used on the home page and the marketplace grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryTile {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub part_count: u32,
    pub description: String,
}

pub fn filter_categories(categories: &[Category], query: &str) -> Vec<Category> {
    let query = query.trim();
    categories
        .iter()
        .filter(|category| {
            contains_ignore_case(&category.name, query)
                || contains_ignore_case(&category.description, query)
                || category.subcategories.iter().any(|s| contains_ignore_case(s, query))
        })
        .cloned()
        .collect()
}

/// Splits the catalog into the featured block and the rest.
pub fn partition_featured(categories: &[Category]) -> (Vec<Category>, Vec<Category>) {
    categories.iter().cloned().partition(|c| c.featured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn search_reaches_subcategories() {
        let categories = fixtures::categories();
        let hits = filter_categories(&categories, "tie rods");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "suspension");

        let all = filter_categories(&categories, "  ");
        assert_eq!(all.len(), categories.len());
    }

    #[test]
    fn featured_split() {
        let (featured, rest) = partition_featured(&fixtures::categories());
        assert_eq!(
            featured.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            ["engine", "brakes", "suspension"]
        );
        assert_eq!(rest.len(), 7);
    }
}
