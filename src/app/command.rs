use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Movie;
use crate::utils::Error;

// A double-quoted run (quotes dropped) or a bare word
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).unwrap());

pub const HELP: &str = "\
Commands:
  add <name> <year> <category> <score>   add a movie
  remove <name>                          remove a movie (and drop it from every collection)
  create <collection>                    create an empty collection
  collect <collection> <movie>           add a movie to a collection
  uncollect <collection> <movie>         remove a movie from a collection
  find <name>                            show the movie with exactly this name
  category <category>                    list movies of a category (case-insensitive)
  year <year>                            list movies released that year
  search [query]                         list movies whose name contains the query (taken verbatim)
  list                                   list all movies
  collections                            list all collections
  export                                 print the catalog as JSON
  help                                   show this message
  quit                                   leave the shell
Use double quotes for names with spaces: add \"The Matrix\" 1999 SciFi 8.7";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Movie),
    Remove(String),
    Create(String),
    Collect { collection: String, movie: String },
    Uncollect { collection: String, movie: String },
    Find(String),
    Category(String),
    Year(i32),
    Search(String),
    List,
    Collections,
    Export,
    Help,
    Quit,
}

impl Command {
    /// Whether a successful run changes the catalog.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Remove(_)
                | Command::Create(_)
                | Command::Collect { .. }
                | Command::Uncollect { .. }
        )
    }

    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, Error> {
        let tokens = tokenize(line);
        let Some((verb, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let [name, year, category, score] = expect_args::<4>("add", args)?;
                Command::Add(Movie::new(
                    non_blank("movie name", name)?,
                    parse_year(&year)?,
                    non_blank("category", category)?,
                    parse_score(&score)?,
                ))
            }
            "remove" => {
                let [name] = expect_args::<1>("remove", args)?;
                Command::Remove(non_blank("movie name", name)?)
            }
            "create" => {
                let [name] = expect_args::<1>("create", args)?;
                Command::Create(non_blank("collection name", name)?)
            }
            "collect" => {
                let [collection, movie] = expect_args::<2>("collect", args)?;
                Command::Collect {
                    collection: non_blank("collection name", collection)?,
                    movie: non_blank("movie name", movie)?,
                }
            }
            "uncollect" => {
                let [collection, movie] = expect_args::<2>("uncollect", args)?;
                Command::Uncollect {
                    collection: non_blank("collection name", collection)?,
                    movie: non_blank("movie name", movie)?,
                }
            }
            "find" => {
                let [name] = expect_args::<1>("find", args)?;
                Command::Find(name)
            }
            "category" => {
                let [category] = expect_args::<1>("category", args)?;
                Command::Category(category)
            }
            "year" => {
                let [year] = expect_args::<1>("year", args)?;
                Command::Year(parse_year(&year)?)
            }
            "search" => Command::Search(rest_of_line(line).to_string()),
            "list" => no_args("list", args, Command::List)?,
            "collections" => no_args("collections", args, Command::Collections)?,
            "export" => no_args("export", args, Command::Export)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(Error::InvalidCommand(format!(
                    "unknown command '{other}' (try 'help')"
                )))
            }
        };
        Ok(Some(command))
    }
}

/// Splits a line into trimmed arguments, honoring double quotes.
pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Everything after the verb, with outer whitespace removed.
fn rest_of_line(line: &str) -> &str {
    line.trim()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim_start())
        .unwrap_or("")
}

fn expect_args<const N: usize>(verb: &str, args: &[String]) -> Result<[String; N], Error> {
    <[String; N]>::try_from(args.to_vec()).map_err(|got| {
        Error::InvalidCommand(format!(
            "'{verb}' takes {N} argument(s), got {}",
            got.len()
        ))
    })
}

fn no_args(verb: &str, args: &[String], command: Command) -> Result<Command, Error> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(Error::InvalidCommand(format!("'{verb}' takes no arguments")))
    }
}

fn non_blank(what: &str, value: String) -> Result<String, Error> {
    if value.is_empty() {
        return Err(Error::InvalidCommand(format!("{what} must not be blank")));
    }
    Ok(value)
}

fn parse_year(raw: &str) -> Result<i32, Error> {
    raw.parse::<i32>()
        .map_err(|_| Error::InvalidCommand(format!("year must be an integer, got '{raw}'")))
}

fn parse_score(raw: &str) -> Result<f64, Error> {
    match raw.parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => Err(Error::InvalidCommand(format!(
            "score must be a number, got '{raw}'"
        ))),
    }
}
