#![no_std]

multiversx_sc::imports!();

pub mod decryption_oracle_mock_proxy;

/// Stand-in for the decryption oracle and its proof verifier in tests.
///
/// Requests are only recorded. The test plays the off-chain oracle:
/// it decrypts the recorded handles, calls `attest` to obtain a proof,
/// and delivers the result to the requesting contract itself.
#[multiversx_sc::contract]
pub trait DecryptionOracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(requestDecrypt)]
    fn request_decrypt(
        &self,
        handles: ManagedVec<Self::Api, u64>,
        callback: ManagedAddress,
    ) -> u64 {
        let request_id = self.last_request_id().update(|last| {
            *last += 1;
            *last
        });
        self.requested_handles(request_id).set(&handles);
        self.callback_address(request_id).set(&callback);
        request_id
    }

    #[endpoint(attest)]
    fn attest(&self, request_id: u64, cleartexts: ManagedBuffer) -> ManagedBuffer {
        require!(
            !self.callback_address(request_id).is_empty(),
            "Unknown request"
        );
        self.attested_cleartexts(request_id).set(&cleartexts);
        self.proof_for(request_id, &cleartexts)
    }

    #[view(verify)]
    fn verify(&self, request_id: u64, cleartexts: ManagedBuffer, proof: ManagedBuffer) -> bool {
        let attested = self.attested_cleartexts(request_id);
        !attested.is_empty()
            && attested.get() == cleartexts
            && self.proof_for(request_id, &cleartexts) == proof
    }

    fn proof_for(&self, request_id: u64, cleartexts: &ManagedBuffer) -> ManagedBuffer {
        let mut preimage = ManagedBuffer::new();
        preimage.append_bytes(&request_id.to_be_bytes());
        preimage.append(cleartexts);
        self.crypto().keccak256(&preimage).as_managed_buffer().clone()
    }

    #[view(getRequestedHandles)]
    fn get_requested_handles(&self, request_id: u64) -> ManagedVec<Self::Api, u64> {
        self.requested_handles(request_id).get()
    }

    #[view(getCallbackAddress)]
    fn get_callback_address(&self, request_id: u64) -> ManagedAddress {
        self.callback_address(request_id).get()
    }

    #[storage_mapper("lastRequestId")]
    fn last_request_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("requestedHandles")]
    fn requested_handles(&self, request_id: u64) -> SingleValueMapper<ManagedVec<Self::Api, u64>>;

    #[storage_mapper("callbackAddress")]
    fn callback_address(&self, request_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("attestedCleartexts")]
    fn attested_cleartexts(&self, request_id: u64) -> SingleValueMapper<ManagedBuffer>;
}
