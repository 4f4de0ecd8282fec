multiversx_sc::imports!();

use crate::errors::ERR_BATCH_NOT_OPEN;
use crate::types::{EncryptedValue, Fund};

// ============================================================
// Batch lifecycle: Closed (initial) <-> Open.
//
// Re-opening an open batch advances the id without a snapshot,
// freezing the previous Fund. Closing is the only path that
// writes a decryption-eligible snapshot.
// ============================================================

#[multiversx_sc::module]
pub trait BatchModule: crate::access_control::AccessControlModule {
    #[endpoint(openBatch)]
    fn open_batch(&self) {
        self.require_owner();
        self.require_not_paused();

        let previous_batch_id = self.current_batch_id().get();
        let batch_id = if self.batch_open().get() {
            let next = previous_batch_id + 1;
            self.current_batch_id().set(next);
            next
        } else {
            previous_batch_id
        };
        self.batch_open().set(true);

        self.batch_opened_event(batch_id, previous_batch_id);
    }

    #[endpoint(closeBatch)]
    fn close_batch(&self) {
        self.require_owner();
        self.require_not_paused();
        self.require_batch_open();

        self.batch_open().set(false);

        let batch_id = self.current_batch_id().get();
        // Same handle, no recomputation. Once initialized, a snapshot is never replaced.
        let mut snapshot = self.load_snapshot(batch_id);
        if !snapshot.is_initialized() {
            snapshot = self.load_fund(batch_id).total_assets;
            self.snapshots(batch_id).set(snapshot);
        }

        self.batch_closed_event(batch_id, &snapshot);
    }

    fn require_batch_open(&self) {
        require!(self.batch_open().get(), ERR_BATCH_NOT_OPEN);
    }

    fn load_fund(&self, batch_id: u64) -> Fund {
        let fund = self.funds(batch_id);
        if fund.is_empty() {
            Fund::default()
        } else {
            fund.get()
        }
    }

    fn load_snapshot(&self, batch_id: u64) -> EncryptedValue {
        let snapshot = self.snapshots(batch_id);
        if snapshot.is_empty() {
            EncryptedValue::Uninitialized
        } else {
            snapshot.get()
        }
    }

    // ========================================================
    // Views
    // ========================================================

    #[view(getBatchState)]
    fn get_batch_state(&self) -> MultiValue2<u64, bool> {
        (self.current_batch_id().get(), self.batch_open().get()).into()
    }

    #[view(getFund)]
    fn get_fund(&self, batch_id: u64) -> Fund {
        self.load_fund(batch_id)
    }

    #[view(getSnapshot)]
    fn get_snapshot(&self, batch_id: u64) -> EncryptedValue {
        self.load_snapshot(batch_id)
    }

    // ========================================================
    // Events
    // ========================================================

    #[event("batchOpened")]
    fn batch_opened_event(&self, #[indexed] batch_id: u64, previous_batch_id: u64);

    #[event("batchClosed")]
    fn batch_closed_event(&self, #[indexed] batch_id: u64, snapshot: &EncryptedValue);

    // ========================================================
    // Storage
    // ========================================================

    #[storage_mapper("currentBatchId")]
    fn current_batch_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("batchOpen")]
    fn batch_open(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("funds")]
    fn funds(&self, batch_id: u64) -> SingleValueMapper<Fund>;

    #[storage_mapper("snapshots")]
    fn snapshots(&self, batch_id: u64) -> SingleValueMapper<EncryptedValue>;
}
