use crate::domain::{Book, BookId, NewBook};
use crate::ports::book_catalog::{BookCatalog as BookCatalogTrait, Result, StoreFailure};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory implementation of BookCatalog
///
/// Rows are kept in insertion order and identities are assigned from a
/// monotonically increasing counter, so deleted ids are never reused.
/// Supports simulating an unreachable store or a failing statement, and
/// counts every store access so tests can assert that validation failures
/// never reach the store.
pub struct BookCatalog {
    state: Mutex<State>,
    unavailable: AtomicBool,
    failing: AtomicBool,
    accesses: AtomicUsize,
}

struct State {
    rows: Vec<Book>,
    next_id: i32,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                rows: Vec::new(),
                next_id: 1,
            }),
            unavailable: AtomicBool::new(false),
            failing: AtomicBool::new(false),
            accesses: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent operation fail as if the connection was refused
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make every subsequent operation fail after the connection is open,
    /// leaving the stored rows untouched
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of operations that reached the store
    pub fn access_count(&self) -> usize {
        self.accesses.load(Ordering::SeqCst)
    }

    /// Seed a row directly, bypassing validation and the access counter
    pub fn seed(&self, book: NewBook) -> Book {
        let mut state = self.state.lock().unwrap();
        let book = book.with_id(BookId::new(state.next_id));
        state.next_id += 1;
        state.rows.push(book.clone());
        book
    }

    fn connect(&self) -> Result<std::sync::MutexGuard<'_, State>> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreFailure::Unavailable(
                "connection refused (simulated)".into(),
            ));
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreFailure::Failed(
                "relation \"books\" is locked (simulated)".into(),
            ));
        }
        Ok(self.state.lock().unwrap())
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn fetch_all(&self) -> Result<Vec<Book>> {
        Ok(self.connect()?.rows.clone())
    }

    async fn fetch_by_title(&self, term: &str) -> Result<Vec<Book>> {
        Ok(self
            .connect()?
            .rows
            .iter()
            .filter(|book| book.title_matches(term))
            .cloned()
            .collect())
    }

    async fn insert(&self, book: &NewBook) -> Result<Book> {
        let mut state = self.connect()?;
        let stored = book.clone().with_id(BookId::new(state.next_id));
        state.next_id += 1;
        state.rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: BookId, book: &NewBook) -> Result<u64> {
        let mut state = self.connect()?;
        match state.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.title = book.title.clone();
                row.author = book.author.clone();
                row.available = book.available;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: BookId) -> Result<u64> {
        let mut state = self.connect()?;
        let before = state.rows.len();
        state.rows.retain(|row| row.id != id);
        Ok((before - state.rows.len()) as u64)
    }
}
