use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::command::{Command, HELP};
use super::render;
use crate::config::ShellConfig;
use crate::core::catalog::{Catalog, CatalogError, EntryKind};
use crate::utils::{Error, FilmshelfResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive front-end: owns the catalog, runs one command per line and re-renders after changes.
pub struct Shell<W: Write> {
    catalog: Catalog,
    config: ShellConfig,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(config: ShellConfig, out: W) -> Self {
        Self {
            catalog: Catalog::new(),
            config,
            out,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Reads commands until end of input or `quit`.
    pub fn run<R: BufRead>(&mut self, input: R) -> FilmshelfResult<()> {
        self.prompt()?;
        for line in input.lines() {
            if self.handle_line(&line?)? == Flow::Quit {
                break;
            }
            self.prompt()?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Handles a single input line. Bad input and catalog failures are reported to the user;
    /// only output failures are returned.
    pub fn handle_line(&mut self, line: &str) -> FilmshelfResult<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(Flow::Continue);
            }
        };

        let mutation = command.is_mutation();
        match self.execute(command) {
            Ok(flow) => {
                if mutation && self.config.render_after_mutation {
                    self.render_state()?;
                }
                Ok(flow)
            }
            Err(Error::CatalogError(e)) => {
                warn!("Command '{}' failed: {e}", line.trim());
                writeln!(self.out, "Error: {}", feedback(&e))?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn execute(&mut self, command: Command) -> FilmshelfResult<Flow> {
        debug!("Executing {:?}", command);
        match command {
            Command::Add(movie) => {
                let name = movie.name.clone();
                self.catalog.add_movie(movie)?;
                writeln!(self.out, "Added '{name}'")?;
            }
            Command::Remove(name) => {
                let movie = self.catalog.remove_movie(&name)?;
                writeln!(self.out, "Removed '{}'", movie.name)?;
            }
            Command::Create(name) => {
                self.catalog.create_collection(name.as_str())?;
                writeln!(self.out, "Created collection '{name}'")?;
            }
            Command::Collect { collection, movie } => {
                self.catalog.add_to_collection(&collection, &movie)?;
                writeln!(self.out, "Added '{movie}' to '{collection}'")?;
            }
            Command::Uncollect { collection, movie } => {
                self.catalog.remove_from_collection(&collection, &movie)?;
                writeln!(self.out, "Removed '{movie}' from '{collection}'")?;
            }
            Command::Find(name) => match self.catalog.find_by_name(&name) {
                Some(movie) => writeln!(self.out, "{}", render::movie_line(movie))?,
                None => writeln!(self.out, "No movie named '{name}'")?,
            },
            Command::Category(category) => {
                let found = self.catalog.find_by_category(&category);
                render::render_movies(&mut self.out, &format!("Category '{category}'"), found)?;
            }
            Command::Year(year) => {
                let found = self.catalog.find_by_year(year);
                render::render_movies(&mut self.out, &format!("Year {year}"), found)?;
            }
            Command::Search(query) => {
                let found = self.catalog.search_by_name(&query);
                render::render_movies(&mut self.out, &format!("Search '{query}'"), found)?;
            }
            Command::List => render::render_movies(&mut self.out, "Movies", self.catalog.movies())?,
            Command::Collections => render::render_collections(&mut self.out, &self.catalog)?,
            Command::Export => {
                let json = serde_json::to_string_pretty(&self.catalog.snapshot())?;
                writeln!(self.out, "{json}")?;
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render_state(&mut self) -> FilmshelfResult<()> {
        render::render_movies(&mut self.out, "Movies", self.catalog.movies())?;
        render::render_collections(&mut self.out, &self.catalog)?;
        Ok(())
    }

    fn prompt(&mut self) -> FilmshelfResult<()> {
        write!(self.out, "{}", self.config.prompt)?;
        self.out.flush()?;
        Ok(())
    }
}

fn feedback(err: &CatalogError) -> String {
    match err {
        CatalogError::DuplicateName { .. } => format!("{err}, pick another name"),
        CatalogError::NotFound {
            kind: EntryKind::Movie,
            ..
        } => format!("{err} (see 'list')"),
        CatalogError::NotFound {
            kind: EntryKind::Collection,
            ..
        } => format!("{err} (see 'collections')"),
        CatalogError::AlreadyMember { .. } => err.to_string(),
    }
}
