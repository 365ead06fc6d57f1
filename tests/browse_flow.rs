//! End-to-end tests for catalog loading and the browse flow.
//!
//! These exercise the full path the CLI drives: a JSON payload on disk,
//! catalog validation, search submission, paging, and selection.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use biblos::catalog::{
    read_catalog, AuthorId, AuthorTable, Book, BookId, Catalog, CatalogFile, GenreId, GenreTable,
    NameEntry,
};
use biblos::page::BOOKS_PER_PAGE;
use biblos::preview::{BookDetail, Preview};
use biblos::query::{Criteria, ANY};
use biblos::session::BrowseSession;

fn titled(id: &str, title: &str, author: &str, genre: &str, year: i32) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author: AuthorId::new(author),
        genres: vec![GenreId::new(genre)],
        image: format!("covers/{id}.jpg"),
        description: format!("About {title}."),
        published: Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
    }
}

fn volume(n: usize) -> Book {
    titled(&format!("b{n}"), &format!("Volume {n}"), "morrison", "fiction", 1970)
}

fn tables() -> (AuthorTable, GenreTable) {
    let authors = AuthorTable::from_entries([
        (AuthorId::new("morrison"), "Toni Morrison".to_string()),
        (AuthorId::new("baldwin"), "James Baldwin".to_string()),
    ])
    .unwrap();
    let genres = GenreTable::from_entries([
        (GenreId::new("fiction"), "Fiction".to_string()),
        (GenreId::new("essays"), "Essays".to_string()),
    ])
    .unwrap();
    (authors, genres)
}

fn shelf(count: usize) -> Arc<Catalog> {
    let books = (0..count).map(volume).collect();
    let (authors, genres) = tables();
    Arc::new(Catalog::load(books, authors, genres).unwrap())
}

#[test]
fn end_to_end_load_search_and_render() {
    let file = CatalogFile {
        books: vec![
            titled("b1", "Beloved", "morrison", "fiction", 1987),
            titled("b2", "Song of Solomon", "morrison", "fiction", 1977),
            titled("b3", "The Fire Next Time", "baldwin", "essays", 1963),
            titled("b4", "Giovanni's Room", "baldwin", "fiction", 1956),
        ],
        authors: vec![
            NameEntry {
                id: "morrison".to_string(),
                name: "Toni Morrison".to_string(),
            },
            NameEntry {
                id: "baldwin".to_string(),
                name: "James Baldwin".to_string(),
            },
        ],
        genres: vec![
            NameEntry {
                id: "fiction".to_string(),
                name: "Fiction".to_string(),
            },
            NameEntry {
                id: "essays".to_string(),
                name: "Essays".to_string(),
            },
        ],
    };

    // Write the payload to disk and load it back the way the CLI does.
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_string_pretty(&file).unwrap()).unwrap();
    let catalog = Arc::new(read_catalog(&path).unwrap());
    assert_eq!(catalog.len(), 4);

    let mut session = BrowseSession::new(Arc::clone(&catalog));

    // Title search is a substring match, so only one title carries "the".
    let window = session.submit(&Criteria::from_form("the", ANY, ANY));
    assert_eq!(window.len(), 1);
    assert_eq!(window.items()[0].title, "The Fire Next Time");

    // Author and genre narrow together.
    let window = session.submit(&Criteria::from_form("", "baldwin", "fiction"));
    assert_eq!(window.len(), 1);
    let preview = Preview::for_book(window.items()[0], &catalog);
    assert_eq!(preview.title, "Giovanni's Room");
    assert_eq!(preview.author, "James Baldwin");

    // Detail projection resolves the author name and extracts the year.
    let book = session.select("b3").unwrap();
    let detail = BookDetail::for_book(book, &catalog);
    assert_eq!(detail.subtitle, "James Baldwin (1963)");
}

#[test]
fn windows_tile_a_large_catalog_exactly_once() {
    // 113 books page out as 36 + 36 + 36 + 5.
    let mut session = BrowseSession::new(shelf(113));

    let mut seen: Vec<String> = Vec::new();
    let (chunk, mut remaining) = {
        let window = session.submit(&Criteria::default());
        assert_eq!(window.len(), BOOKS_PER_PAGE);
        assert_eq!(window.page(), 1);
        (
            window.items().iter().map(|b| b.id.to_string()).collect::<Vec<_>>(),
            window.remaining(),
        )
    };
    seen.extend(chunk);
    assert_eq!(remaining, 77);

    let mut sizes = vec![seen.len()];
    while remaining > 0 {
        let (chunk, rest) = {
            let window = session.show_more();
            (
                window.items().iter().map(|b| b.id.to_string()).collect::<Vec<_>>(),
                window.remaining(),
            )
        };
        sizes.push(chunk.len());
        seen.extend(chunk);
        remaining = rest;
    }

    assert_eq!(sizes, [36, 36, 36, 5]);
    let expected: Vec<String> = (0..113).map(|n| format!("b{n}")).collect();
    assert_eq!(seen, expected);

    // The next pull past the end is empty but legal.
    let window = session.show_more();
    assert!(window.is_empty());
    assert_eq!(window.remaining(), 0);
    assert!(!window.no_results());
}

#[test]
fn filtered_set_smaller_than_a_page_fits_one_window() {
    let (authors, genres) = tables();
    let catalog = Arc::new(
        Catalog::load(
            vec![
                titled("a", "Sula", "morrison", "fiction", 1973),
                titled("b", "Notes of a Native Son", "baldwin", "essays", 1955),
                titled("c", "Jazz", "morrison", "fiction", 1992),
            ],
            authors,
            genres,
        )
        .unwrap(),
    );
    let mut session = BrowseSession::new(catalog);

    // The genre filter keeps the first and third books, in order.
    let window = session.submit(&Criteria::from_form("", ANY, "fiction"));
    let titles: Vec<&str> = window.items().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Sula", "Jazz"]);
    assert_eq!(window.remaining(), 0);
    assert!(!window.has_more());
    drop(window);

    // Pulling anyway is legal and yields an empty window.
    let next = session.show_more();
    assert!(next.is_empty());
    assert_eq!(next.remaining(), 0);
}

#[test]
fn new_search_discards_paging_progress() {
    let mut session = BrowseSession::new(shelf(113));
    session.submit(&Criteria::default());
    session.show_more();
    session.show_more();
    assert_eq!(session.page(), 3);

    // "volume 1" matches Volume 1, 10-19, and 100-112.
    let window = session.submit(&Criteria::from_form("volume 1", ANY, ANY));
    assert_eq!(window.page(), 1);
    assert_eq!(window.len(), 24);
    assert_eq!(window.remaining(), 0);
    assert_eq!(session.page(), 1);
}

#[test]
fn selection_ignores_the_active_search() {
    let mut session = BrowseSession::new(shelf(50));
    let window = session.submit(&Criteria::from_form("zzz", ANY, ANY));
    assert!(window.no_results());

    let book = session.select("b42").unwrap();
    assert_eq!(book.title, "Volume 42");
    assert!(session.select("b999").is_none());
}

#[test]
fn load_rejects_duplicate_book_ids() {
    let (authors, genres) = tables();
    let books = vec![volume(7), volume(7)];
    let err = Catalog::load(books, authors, genres).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("duplicate book id \"b7\""));
}

#[test]
fn load_rejects_dangling_references() {
    let (authors, genres) = tables();
    let mut stray = volume(1);
    stray.author = AuthorId::new("nobody");
    let err = Catalog::load(vec![stray], authors, genres).unwrap_err();
    assert!(format!("{err}").contains("unknown author id \"nobody\""));

    let (authors, genres) = tables();
    let mut stray = volume(2);
    stray.genres.push(GenreId::new("jazz"));
    let err = Catalog::load(vec![stray], authors, genres).unwrap_err();
    assert!(format!("{err}").contains("unknown genre id \"jazz\""));
}
