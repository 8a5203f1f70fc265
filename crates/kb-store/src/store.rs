use crate::notify::Notifier;

use kb_core::{Board, BoardGateway, StoreError};

use std::sync::Arc;

use log::error;
use uuid::Uuid;

/// Single authoritative in-memory snapshot: the list of all boards plus
/// the currently selected one. Constructed once at startup with an
/// injected gateway and notifier, then threaded through the call graph;
/// nothing reads board state from anywhere else.
pub struct BoardStore {
    gateway: Arc<dyn BoardGateway>,
    notifier: Arc<dyn Notifier>,

    boards: Vec<Board>,
    current: Option<Board>,

    is_loading: bool,
    is_updating: bool,
    has_loaded: bool,
    last_error: Option<StoreError>,
}

impl BoardStore {
    pub fn new(gateway: Arc<dyn BoardGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            boards: Vec::new(),
            current: None,
            is_loading: true,
            is_updating: false,
            has_loaded: false,
            last_error: None,
        }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.current.as_ref()
    }

    /// Full-board skeleton loader flag; only the first fetch drives it.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// In-flight flag for every fetch after the first.
    pub fn is_updating(&self) -> bool {
        self.is_updating
    }

    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    /// Direct replacement of the selected board, no validation that it is
    /// present in `boards`.
    pub fn set_current_board(&mut self, board: Board) {
        self.current = Some(board);
    }

    /// Re-fetches everything from the gateway and replaces `boards`
    /// wholesale. The selected board is re-resolved by id against the
    /// fresh list, falling back to the first board (or none); this is
    /// what corrects any divergence an optimistic patch introduced. On
    /// failure the prior snapshot stays as is, stale but consistent.
    pub async fn refresh_boards(&mut self) {
        if self.has_loaded {
            self.is_updating = true;
        } else {
            self.is_loading = true;
        }

        match self.gateway.get_boards().await {
            Ok(boards) => {
                self.boards = boards;
                self.current = match self.current.take() {
                    Some(current) => self
                        .boards
                        .iter()
                        .find(|b| b.id == current.id)
                        .cloned()
                        .or_else(|| self.boards.first().cloned()),
                    None => self.boards.first().cloned(),
                };
                self.last_error = None;
            }
            Err(err) => {
                error!("Error fetching boards: {err}");
                self.last_error = Some(err);
            }
        }

        self.has_loaded = true;
        self.is_loading = false;
        self.is_updating = false;
    }

    pub(crate) fn gateway(&self) -> &Arc<dyn BoardGateway> {
        &self.gateway
    }

    pub(crate) fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Commits an optimistically patched tree as the selected board.
    pub(crate) fn commit_current(&mut self, board: Board) {
        self.current = Some(board);
    }

    /// Optimistic counterpart of a board deletion: drop it from the list
    /// and hand selection to the first remaining board.
    pub(crate) fn forget_board(&mut self, id: Uuid) {
        self.boards.retain(|b| b.id != id);
        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.current = self.boards.first().cloned();
        }
    }
}
