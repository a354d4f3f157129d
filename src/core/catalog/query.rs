use serde::Serialize;

use super::fold::{eq_ignore_case, fold_case};
use super::Catalog;
use crate::models::Movie;

/// Borrowed, serializable view of the whole catalog.
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub movies: Vec<&'a Movie>,
    pub collections: Vec<CollectionView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CollectionView<'a> {
    pub name: &'a str,
    pub movies: &'a [String],
}

impl Catalog {
    pub fn find_by_name(&self, name: &str) -> Option<&Movie> {
        self.movies.get(name)
    }

    pub fn find_by_category(&self, category: &str) -> Vec<&Movie> {
        self.movies()
            .filter(|m| eq_ignore_case(&m.category, category))
            .collect()
    }

    pub fn find_by_year(&self, year: i32) -> Vec<&Movie> {
        self.movies().filter(|m| m.year == year).collect()
    }

    /// Case-insensitive substring match on the name. An empty query matches everything.
    pub fn search_by_name(&self, query: &str) -> Vec<&Movie> {
        let needle = fold_case(query);
        self.movies()
            .filter(|m| fold_case(&m.name).contains(&needle))
            .collect()
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            movies: self.movies().collect(),
            collections: self
                .collections()
                .map(|(name, movies)| CollectionView { name, movies })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for movie in [
            Movie::new("The Matrix", 1999, "SciFi", 8.7),
            Movie::new("Heat", 1995, "Crime", 8.3),
            Movie::new("Alien: The Director's Cut", 1979, "scifi", 8.5),
            Movie::new("Fight Club", 1999, "Drama", 8.8),
        ] {
            catalog.add_movie(movie).unwrap();
        }
        catalog
    }

    fn names(movies: Vec<&Movie>) -> Vec<&str> {
        movies.into_iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn category_lookup_ignores_case_and_keeps_order() {
        let catalog = catalog();
        let upper = names(catalog.find_by_category("SCIFI"));
        assert_eq!(upper, vec!["The Matrix", "Alien: The Director's Cut"]);
        assert_eq!(names(catalog.find_by_category("scifi")), upper);
        assert_eq!(
            names(catalog.find_by_category("drama")),
            names(catalog.find_by_category("Drama"))
        );
        assert!(catalog.find_by_category("Western").is_empty());
    }

    #[test]
    fn year_lookup_is_exact() {
        let catalog = catalog();
        assert_eq!(
            names(catalog.find_by_year(1999)),
            vec!["The Matrix", "Fight Club"]
        );
        assert!(catalog.find_by_year(2008).is_empty());
    }

    #[test]
    fn name_lookup_is_exact() {
        let catalog = catalog();
        assert!(catalog.find_by_name("heat").is_none());
        assert_eq!(catalog.find_by_name("Heat").map(|m| m.year), Some(1995));
    }

    #[test]
    fn search_matches_substrings() {
        let catalog = catalog();
        assert_eq!(
            names(catalog.search_by_name("the")),
            vec!["The Matrix", "Alien: The Director's Cut"]
        );
        assert_eq!(catalog.search_by_name("").len(), 4);
        assert!(catalog.search_by_name("zzz").is_empty());
    }

    #[test]
    fn matching_folds_case_only() {
        let mut catalog = Catalog::new();
        catalog.add_movie(Movie::new("Top²", 2000, "²", 5.0)).unwrap();
        catalog.add_movie(Movie::new("ﬁnal", 2001, "Drama", 6.0)).unwrap();

        assert!(catalog.find_by_category("2").is_empty());
        assert!(catalog.search_by_name("fi").is_empty());
        assert!(catalog.search_by_name("p2").is_empty());
        assert_eq!(names(catalog.find_by_category("²")), vec!["Top²"]);
    }

    #[test]
    fn snapshot_serializes_both_registries() {
        let mut catalog = catalog();
        catalog.create_collection("Nineties").unwrap();
        catalog.add_to_collection("Nineties", "Heat").unwrap();

        let json = serde_json::to_value(catalog.snapshot()).unwrap();
        assert_eq!(json["movies"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["movies"][1]["name"], "Heat");
        assert_eq!(json["collections"][0]["name"], "Nineties");
        assert_eq!(json["collections"][0]["movies"][0], "Heat");
    }
}
