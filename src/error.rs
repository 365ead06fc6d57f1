//! Rich diagnostic error types for the biblos engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes, help text, and source chains so users
//! know exactly what went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the biblos engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text, sources) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum BiblosError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Errors from catalog loading and reference resolution.
///
/// The load-time variants (`DuplicateBook`, `DuplicateEntry`,
/// `DanglingReference`) are fatal: a catalog that fails validation is never
/// constructed. `UnknownReference` is a lookup-time miss that callers
/// rendering display names recover from locally with a fallback label.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("duplicate book id \"{id}\"")]
    #[diagnostic(
        code(biblos::catalog::duplicate_book),
        help(
            "Every book in the catalog must carry a unique id. \
             Remove or re-id one of the records sharing \"{id}\" \
             before loading."
        )
    )]
    DuplicateBook { id: String },

    #[error("duplicate {table} id \"{id}\"")]
    #[diagnostic(
        code(biblos::catalog::duplicate_entry),
        help(
            "Ids within a lookup table must be unique. \
             Check the {table} entries in the catalog data."
        )
    )]
    DuplicateEntry { table: &'static str, id: String },

    #[error("book \"{book}\" references unknown {table} id \"{id}\"")]
    #[diagnostic(
        code(biblos::catalog::dangling_reference),
        help(
            "Every reference in a book record must resolve against the \
             tables loaded with it. Add the missing {table} entry or fix \
             the book record."
        )
    )]
    DanglingReference {
        book: String,
        table: &'static str,
        id: String,
    },

    #[error("unknown {table} id \"{id}\"")]
    #[diagnostic(
        code(biblos::catalog::unknown_reference),
        help(
            "No entry with this id exists in the {table} table. Callers \
             rendering display names should fall back to an \"unknown\" \
             label instead of propagating this."
        )
    )]
    UnknownReference { table: &'static str, id: String },
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors from reading the catalog data file.
#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("failed to read catalog file: {path}")]
    #[diagnostic(
        code(biblos::source::read),
        help(
            "Ensure the catalog file exists and is readable. \
             Pass --catalog to point at a different file."
        )
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {message}")]
    #[diagnostic(
        code(biblos::source::parse),
        help(
            "The catalog must be a JSON document with \"books\", \
             \"authors\" and \"genres\" arrays."
        )
    )]
    Parse { path: String, message: String },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors from loading the optional CLI configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file: {path}")]
    #[diagnostic(
        code(biblos::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    #[diagnostic(
        code(biblos::config::parse),
        help("Check the TOML syntax in the config file.")
    )]
    Parse { path: String, message: String },
}

/// Convenience alias for functions returning biblos results.
pub type BiblosResult<T> = std::result::Result<T, BiblosError>;
