//! Read-only board/card source consumed by the digest builder.

use crate::error::StoreError;
use crate::types::{Block, Board};

/// The two listing calls the digest needs. Implementations must return rows
/// in a deterministic storage order; the digest preserves it and does not
/// sort.
pub trait BoardStore {
    /// All boards, in storage-return order.
    fn list_boards(&self) -> Result<Vec<Board>, StoreError>;

    /// All blocks on one board, in storage-return order. Callers filter by
    /// block type and soft-delete marker themselves.
    fn list_blocks_for_board(&self, board_id: &str) -> Result<Vec<Block>, StoreError>;
}
