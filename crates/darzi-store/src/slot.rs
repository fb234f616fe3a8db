//! # Collection Slot
//!
//! One fetched collection plus its loading/error state. The slot is the
//! unit every store is built from.
//!
//! ## Stale-Response Guard
//! Refreshes can overlap (a search keystroke fires a new fetch while the
//! previous one is in flight). Each `begin_fetch` hands out a ticket
//! from a monotonically increasing sequence; only the ticket from the
//! newest fetch may install data or record an error. A late response is
//! discarded, whatever order the network delivered them in.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   begin_fetch() ──► ticket #1          begin_fetch() ──► ticket #2      │
//! │        │                                     │                          │
//! │        │  (slow response)                    │  (fast response)         │
//! │        ▼                                     ▼                          │
//! │   apply(#1, old data) ─► DISCARDED      apply(#2, new data) ─► kept     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed fetch records its message but keeps the previously loaded
//! collection, so the screen can show stale data alongside the error.

/// Proof that a fetch was started; pass it back to [`Slot::apply`] or
/// [`Slot::fail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// A fetched collection with loading and error state.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    /// Sequence number of the newest fetch started.
    seq: u64,
    /// Whether any fetch has ever completed successfully.
    loaded: bool,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot {
            items: Vec::new(),
            loading: false,
            error: None,
            seq: 0,
            loaded: false,
        }
    }
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch: clears the error, raises `loading`, and returns
    /// the ticket the response must present.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.seq)
    }

    /// Installs fetched data if `ticket` is still the newest fetch.
    /// Returns whether the data was kept.
    pub fn apply(&mut self, ticket: FetchTicket, items: Vec<T>) -> bool {
        if ticket.0 != self.seq {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.seq,
                "discarding stale fetch response"
            );
            return false;
        }
        self.items = items;
        self.loading = false;
        self.error = None;
        self.loaded = true;
        true
    }

    /// Records a fetch failure if `ticket` is still the newest fetch.
    /// The previously loaded items stay in place.
    pub fn fail(&mut self, ticket: FetchTicket, message: impl Into<String>) -> bool {
        if ticket.0 != self.seq {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.seq,
                "discarding stale fetch failure"
            );
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// The loaded collection. Empty until the first successful fetch.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Swaps one loaded item for a freshly fetched copy.
    ///
    /// Bypasses the ticket sequence: a targeted single-item refresh
    /// must not invalidate a concurrent full refetch.
    pub fn replace_at(&mut self, index: usize, item: T) {
        if index < self.items.len() {
            self.items[index] = item;
        }
    }

    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The newest fetch's error, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether any fetch has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
