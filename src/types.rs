multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Length of the commitment encoding of a single handle: tag byte + big-endian id.
pub const COMMITMENT_BYTES_LEN: usize = 9;

/// Number of handles committed to by a decryption request.
pub const COMMITTED_HANDLE_COUNT: usize = 5;

/// Width of one decrypted scalar in a callback payload.
pub const CLEARTEXT_SCALAR_LEN: usize = 8;

/// Handle id forwarded to the oracle in place of an uninitialized value.
pub const NULL_HANDLE: u64 = 0;

// ============================================================
// Encrypted Value — opaque handle issued by the FHE engine
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default,
)]
pub enum EncryptedValue {
    /// Never assigned. Every homomorphic operation rejects it.
    #[default]
    Uninitialized,
    /// Ciphertext handle id, as issued by the engine.
    Handle(u64),
}

impl EncryptedValue {
    pub fn is_initialized(&self) -> bool {
        matches!(self, EncryptedValue::Handle(_))
    }

    pub fn handle_id(&self) -> Option<u64> {
        match self {
            EncryptedValue::Handle(id) => Some(*id),
            EncryptedValue::Uninitialized => None,
        }
    }

    /// Bytes bound into a state commitment. Identifies the ciphertext,
    /// never its plaintext.
    pub fn commitment_bytes(&self) -> [u8; COMMITMENT_BYTES_LEN] {
        let mut bytes = [0u8; COMMITMENT_BYTES_LEN];
        if let EncryptedValue::Handle(id) = self {
            bytes[0] = 1;
            bytes[1..].copy_from_slice(&id.to_be_bytes());
        }
        bytes
    }
}

// ============================================================
// Fund — the encrypted aggregate of one batch
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug, Default)]
pub struct Fund {
    /// Sum of every submitted total across providers.
    pub total_assets: EncryptedValue,
    /// Last submitted manager fee rate.
    pub manager_fee_rate: EncryptedValue,
    /// Last submitted performance fee rate.
    pub performance_fee_rate: EncryptedValue,
    /// Running maximum of a single submitted total.
    pub high_water_mark: EncryptedValue,
}

impl Fund {
    pub fn is_initialized(&self) -> bool {
        self.total_assets.is_initialized()
    }

    /// The committed handle list, in the fixed order shared by request and callback.
    pub fn committed_handles(
        &self,
        snapshot: EncryptedValue,
    ) -> [EncryptedValue; COMMITTED_HANDLE_COUNT] {
        [
            self.total_assets,
            self.manager_fee_rate,
            self.performance_fee_rate,
            self.high_water_mark,
            snapshot,
        ]
    }
}

// ============================================================
// Decryption Context — pending request against a committed state
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct DecryptionContext<M: ManagedTypeApi> {
    pub batch_id: u64,
    pub state_hash: ManagedByteArray<M, 32>,
    /// Flips to true exactly once, when the callback is accepted.
    pub processed: bool,
}

/// Plaintexts released by an accepted callback, in commitment order.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct DecryptedFund {
    pub total_assets: u64,
    pub manager_fee_rate: u64,
    pub performance_fee_rate: u64,
    pub high_water_mark: u64,
    pub snapshot_at_close: u64,
}

// ============================================================
// Cooldown Class — one rate-limit ledger per operation class
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CooldownClass {
    Submission,
    DecryptionRequest,
}
