//! The movie catalog: a registry of movies plus named, ordered collections of them.
//!
//! Every mutator either applies fully or returns a [`CatalogError`] with the catalog untouched.
//! Collections only ever hold names of movies that are currently in the catalog; removing a
//! movie drops it from every collection.

mod errors;
pub mod fold;
mod query;
mod registry;

pub use errors::{CatalogError, EntryKind};
pub use query::{CatalogSnapshot, CollectionView};

use tracing::debug;

use crate::models::Movie;
use registry::OrderedRegistry;

#[derive(Debug, Default)]
pub struct Catalog {
    movies: OrderedRegistry<Movie>,
    collections: OrderedRegistry<Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_movie(&mut self, movie: Movie) -> Result<(), CatalogError> {
        if self.movies.contains(&movie.name) {
            return Err(CatalogError::duplicate(EntryKind::Movie, &movie.name));
        }
        debug!("Adding movie '{}' ({})", movie.name, movie.year);
        self.movies.insert(movie.name.clone(), movie);
        Ok(())
    }

    /// Removes the movie and purges it from every collection. Emptied collections are kept.
    pub fn remove_movie(&mut self, name: &str) -> Result<Movie, CatalogError> {
        let movie = self
            .movies
            .remove(name)
            .ok_or_else(|| CatalogError::not_found(EntryKind::Movie, name))?;

        for members in self.collections.values_mut() {
            members.retain(|m| m != name);
        }
        debug!("Removed movie '{}'", name);
        Ok(movie)
    }

    pub fn create_collection(&mut self, name: impl Into<String>) -> Result<(), CatalogError> {
        let name = name.into();
        if self.collections.contains(&name) {
            return Err(CatalogError::duplicate(EntryKind::Collection, &name));
        }
        debug!("Creating collection '{}'", name);
        self.collections.insert(name, Vec::new());
        Ok(())
    }

    pub fn add_to_collection(&mut self, collection: &str, movie: &str) -> Result<(), CatalogError> {
        let members = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| CatalogError::not_found(EntryKind::Collection, collection))?;
        if !self.movies.contains(movie) {
            return Err(CatalogError::not_found(EntryKind::Movie, movie));
        }
        if members.iter().any(|m| m == movie) {
            return Err(CatalogError::AlreadyMember {
                collection: collection.to_string(),
                movie: movie.to_string(),
            });
        }
        debug!("Adding '{}' to collection '{}'", movie, collection);
        members.push(movie.to_string());
        Ok(())
    }

    /// Removing a movie that is not a member is a successful no-op; unknown names are still errors.
    pub fn remove_from_collection(
        &mut self,
        collection: &str,
        movie: &str,
    ) -> Result<(), CatalogError> {
        let members = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| CatalogError::not_found(EntryKind::Collection, collection))?;
        if !self.movies.contains(movie) {
            return Err(CatalogError::not_found(EntryKind::Movie, movie));
        }
        members.retain(|m| m != movie);
        debug!("Removed '{}' from collection '{}'", movie, collection);
        Ok(())
    }

    /// All movies in insertion order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.movies.values()
    }

    /// Every collection with its member names, in creation order.
    pub fn collections(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.collections
            .iter()
            .map(|(name, members)| (name, members.as_slice()))
    }

    pub fn collection(&self, name: &str) -> Option<&[String]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    /// Members of a collection resolved to movies, in membership order.
    pub fn collection_movies(&self, name: &str) -> Option<Vec<&Movie>> {
        let members = self.collections.get(name)?;
        Some(
            members
                .iter()
                .filter_map(|m| self.movies.get(m))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }
}
