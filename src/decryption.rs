multiversx_sc::imports!();

use crate::errors::{
    ERR_DECRYPTION_FAILED, ERR_INVALID_INPUT, ERR_REPLAY_DETECTED, ERR_STATE_MISMATCH,
};
use crate::types::{
    CooldownClass, DecryptedFund, DecryptionContext, EncryptedValue, CLEARTEXT_SCALAR_LEN,
    COMMITTED_HANDLE_COUNT, NULL_HANDLE,
};
use crate::{decryption_oracle_proxy, proof_verifier_proxy};

// ============================================================
// Decryption protocol.
//
// Request: commit to the five live handles of a batch, forward
// them to the oracle, park a context under the oracle's id.
// Callback: accept only if the batch still commits to the exact
// same handles, the proof checks out, and the context is unused.
// ============================================================

#[multiversx_sc::module]
pub trait DecryptionModule:
    crate::access_control::AccessControlModule
    + crate::cooldown::CooldownModule
    + crate::batch::BatchModule
{
    #[endpoint(requestFundDecryption)]
    fn request_fund_decryption(&self, batch_id: u64) -> u64 {
        let provider = self.require_provider();
        self.require_not_paused();
        self.require_cooldown_elapsed(&provider, CooldownClass::DecryptionRequest);

        let fund = self.load_fund(batch_id);
        require!(fund.is_initialized(), ERR_INVALID_INPUT);

        let handles = fund.committed_handles(self.load_snapshot(batch_id));
        let state_hash = self.compute_state_hash(&handles);

        let mut handle_ids: ManagedVec<Self::Api, u64> = ManagedVec::new();
        for value in handles.iter() {
            handle_ids.push(value.handle_id().unwrap_or(NULL_HANDLE));
        }

        let request_id: u64 = self
            .tx()
            .to(&self.decryption_oracle_address().get())
            .typed(decryption_oracle_proxy::DecryptionOracleProxy)
            .request_decrypt(handle_ids, self.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call();

        let context = self.decryption_contexts(request_id);
        require!(context.is_empty(), ERR_INVALID_INPUT);
        context.set(DecryptionContext {
            batch_id,
            state_hash: state_hash.clone(),
            processed: false,
        });

        // Only a request that was actually issued starts the window.
        self.record_action(&provider, CooldownClass::DecryptionRequest);

        self.decryption_requested_event(request_id, batch_id, &state_hash);
        request_id
    }

    /// Open to any caller: the proof is authenticated, not the sender.
    #[endpoint(onDecryptionResult)]
    fn on_decryption_result(
        &self,
        request_id: u64,
        cleartexts: ManagedBuffer,
        proof: ManagedBuffer,
    ) {
        let context_mapper = self.decryption_contexts(request_id);
        require!(!context_mapper.is_empty(), ERR_INVALID_INPUT);

        let mut context = context_mapper.get();
        require!(!context.processed, ERR_REPLAY_DETECTED);

        let current_hash = self.current_state_hash(context.batch_id);
        require!(current_hash == context.state_hash, ERR_STATE_MISMATCH);

        let verified: bool = self
            .tx()
            .to(&self.proof_verifier_address().get())
            .typed(proof_verifier_proxy::ProofVerifierProxy)
            .verify(request_id, cleartexts.clone(), proof)
            .returns(ReturnsResult)
            .sync_call();
        require!(verified, ERR_DECRYPTION_FAILED);

        let decrypted = self.decode_cleartexts(&cleartexts);

        context.processed = true;
        context_mapper.set(&context);

        self.fund_decrypted_event(request_id, context.batch_id, &decrypted);
    }

    // ========================================================
    // INTERNAL: state commitment
    // ========================================================

    fn compute_state_hash(
        &self,
        handles: &[EncryptedValue; COMMITTED_HANDLE_COUNT],
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut preimage = ManagedBuffer::new();
        for value in handles.iter() {
            preimage.append_bytes(&value.commitment_bytes());
        }
        // Binds the commitment to this contract instance.
        preimage.append(self.blockchain().get_sc_address().as_managed_buffer());

        self.crypto().keccak256(&preimage)
    }

    fn current_state_hash(&self, batch_id: u64) -> ManagedByteArray<Self::Api, 32> {
        let handles = self
            .load_fund(batch_id)
            .committed_handles(self.load_snapshot(batch_id));
        self.compute_state_hash(&handles)
    }

    /// Five big-endian u64 scalars, in commitment order.
    fn decode_cleartexts(&self, cleartexts: &ManagedBuffer) -> DecryptedFund {
        require!(
            cleartexts.len() == COMMITTED_HANDLE_COUNT * CLEARTEXT_SCALAR_LEN,
            ERR_DECRYPTION_FAILED
        );

        let mut values = [0u64; COMMITTED_HANDLE_COUNT];
        for (index, value) in values.iter_mut().enumerate() {
            let mut scalar = [0u8; CLEARTEXT_SCALAR_LEN];
            let loaded = cleartexts.load_slice(index * CLEARTEXT_SCALAR_LEN, &mut scalar);
            require!(loaded.is_ok(), ERR_DECRYPTION_FAILED);
            *value = u64::from_be_bytes(scalar);
        }

        DecryptedFund {
            total_assets: values[0],
            manager_fee_rate: values[1],
            performance_fee_rate: values[2],
            high_water_mark: values[3],
            snapshot_at_close: values[4],
        }
    }

    // ========================================================
    // Views
    // ========================================================

    #[view(getDecryptionContext)]
    fn get_decryption_context(&self, request_id: u64) -> DecryptionContext<Self::Api> {
        let context = self.decryption_contexts(request_id);
        require!(!context.is_empty(), ERR_INVALID_INPUT);
        context.get()
    }

    /// The commitment a request issued now would carry.
    #[view(getStateHash)]
    fn get_state_hash(&self, batch_id: u64) -> ManagedByteArray<Self::Api, 32> {
        self.current_state_hash(batch_id)
    }

    // ========================================================
    // Events
    // ========================================================

    #[event("decryptionRequested")]
    fn decryption_requested_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] batch_id: u64,
        state_hash: &ManagedByteArray<Self::Api, 32>,
    );

    #[event("fundDecrypted")]
    fn fund_decrypted_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] batch_id: u64,
        decrypted: &DecryptedFund,
    );

    // ========================================================
    // Storage
    // ========================================================

    #[storage_mapper("decryptionOracleAddress")]
    fn decryption_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("proofVerifierAddress")]
    fn proof_verifier_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("decryptionContexts")]
    fn decryption_contexts(
        &self,
        request_id: u64,
    ) -> SingleValueMapper<DecryptionContext<Self::Api>>;
}
