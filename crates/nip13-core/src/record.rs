//! The interface the miner and committed-difficulty check need from an event.

use crate::tags::Tags;

/// A content-addressed record whose id can be recomputed after mutation.
pub trait Record {
    /// Hex public key of the author. Empty means absent.
    fn pubkey(&self) -> &str;

    /// The currently stored id.
    fn id(&self) -> &str;

    fn tags(&self) -> &Tags;

    fn tags_mut(&mut self) -> &mut Tags;

    /// Set the creation timestamp (Unix seconds).
    fn set_created_at(&mut self, created_at: u64);

    /// Recompute the id from the current fields, store it, and return it.
    fn recompute_id(&mut self) -> &str;
}

impl<R: Record + ?Sized> Record for &mut R {
    fn pubkey(&self) -> &str {
        (**self).pubkey()
    }

    fn id(&self) -> &str {
        (**self).id()
    }

    fn tags(&self) -> &Tags {
        (**self).tags()
    }

    fn tags_mut(&mut self) -> &mut Tags {
        (**self).tags_mut()
    }

    fn set_created_at(&mut self, created_at: u64) {
        (**self).set_created_at(created_at)
    }

    fn recompute_id(&mut self) -> &str {
        (**self).recompute_id()
    }
}
