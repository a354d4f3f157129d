use std::io::{self, Write};

use crate::core::catalog::Catalog;
use crate::models::Movie;

pub fn movie_line(movie: &Movie) -> String {
    format!(
        "{} ({}) [{}] {:.1}",
        movie.name, movie.year, movie.category, movie.score
    )
}

pub fn render_movies<'a, W: Write>(
    out: &mut W,
    heading: &str,
    movies: impl IntoIterator<Item = &'a Movie>,
) -> io::Result<()> {
    writeln!(out, "{heading}:")?;
    let mut empty = true;
    for movie in movies {
        empty = false;
        writeln!(out, "  - {}", movie_line(movie))?;
    }
    if empty {
        writeln!(out, "  (none)")?;
    }
    Ok(())
}

pub fn render_collections<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Collections:")?;
    if catalog.collection_count() == 0 {
        return writeln!(out, "  (none)");
    }
    for (name, members) in catalog.collections() {
        writeln!(out, "  {} ({})", name, members.len())?;
        for movie in members.iter().filter_map(|m| catalog.find_by_name(m)) {
            writeln!(out, "    - {}", movie_line(movie))?;
        }
    }
    Ok(())
}
