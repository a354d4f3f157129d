mod errors;

pub use errors::Error;

pub type FilmshelfResult<T> = Result<T, Error>;
