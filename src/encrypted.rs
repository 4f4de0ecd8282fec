multiversx_sc::imports!();

use crate::errors::ERR_INVALID_INPUT;
use crate::fhe_engine_proxy;
use crate::types::EncryptedValue;

// ============================================================
// Encrypted value capability.
//
// Thin wrappers over the external FHE engine. Every operand
// must be an initialized handle; results are always fresh
// handles, so nothing here ever branches on a plaintext.
// ============================================================

#[multiversx_sc::module]
pub trait EncryptedValueModule {
    fn fhe_encode(&self, plaintext: u64) -> EncryptedValue {
        let handle: u64 = self
            .tx()
            .to(&self.fhe_engine_address().get())
            .typed(fhe_engine_proxy::FheEngineProxy)
            .encode(plaintext)
            .returns(ReturnsResult)
            .sync_call();
        EncryptedValue::Handle(handle)
    }

    fn fhe_add(&self, lhs: EncryptedValue, rhs: EncryptedValue) -> EncryptedValue {
        let lhs = self.require_handle(lhs);
        let rhs = self.require_handle(rhs);
        let handle: u64 = self
            .tx()
            .to(&self.fhe_engine_address().get())
            .typed(fhe_engine_proxy::FheEngineProxy)
            .add(lhs, rhs)
            .returns(ReturnsResult)
            .sync_call();
        EncryptedValue::Handle(handle)
    }

    /// Encrypted boolean handle for `lhs >= rhs`.
    fn fhe_compare_ge(&self, lhs: EncryptedValue, rhs: EncryptedValue) -> EncryptedValue {
        let lhs = self.require_handle(lhs);
        let rhs = self.require_handle(rhs);
        let handle: u64 = self
            .tx()
            .to(&self.fhe_engine_address().get())
            .typed(fhe_engine_proxy::FheEngineProxy)
            .compare_ge(lhs, rhs)
            .returns(ReturnsResult)
            .sync_call();
        EncryptedValue::Handle(handle)
    }

    fn fhe_select(
        &self,
        condition: EncryptedValue,
        if_true: EncryptedValue,
        if_false: EncryptedValue,
    ) -> EncryptedValue {
        let condition = self.require_handle(condition);
        let if_true = self.require_handle(if_true);
        let if_false = self.require_handle(if_false);
        let handle: u64 = self
            .tx()
            .to(&self.fhe_engine_address().get())
            .typed(fhe_engine_proxy::FheEngineProxy)
            .select(condition, if_true, if_false)
            .returns(ReturnsResult)
            .sync_call();
        EncryptedValue::Handle(handle)
    }

    /// Tagged `Uninitialized` values are rejected locally; handle ids
    /// are checked against the engine, which alone knows which ids it issued.
    fn fhe_is_initialized(&self, value: EncryptedValue) -> bool {
        match value {
            EncryptedValue::Uninitialized => false,
            EncryptedValue::Handle(handle) => self
                .tx()
                .to(&self.fhe_engine_address().get())
                .typed(fhe_engine_proxy::FheEngineProxy)
                .is_initialized(handle)
                .returns(ReturnsResult)
                .sync_call(),
        }
    }

    fn require_initialized(&self, value: EncryptedValue) {
        require!(self.fhe_is_initialized(value), ERR_INVALID_INPUT);
    }

    fn require_handle(&self, value: EncryptedValue) -> u64 {
        match value.handle_id() {
            Some(handle) => handle,
            None => sc_panic!(ERR_INVALID_INPUT),
        }
    }

    #[storage_mapper("fheEngineAddress")]
    fn fhe_engine_address(&self) -> SingleValueMapper<ManagedAddress>;
}
