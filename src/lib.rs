#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod aggregator;
pub mod batch;
pub mod confidential_fund_proxy;
pub mod cooldown;
pub mod decryption;
pub mod decryption_oracle_proxy;
pub mod encrypted;
pub mod errors;
pub mod fhe_engine_proxy;
pub mod proof_verifier_proxy;
pub mod types;

use errors::ERR_INVALID_INPUT;

// ============================================================
// Contract
//
// Providers submit encrypted fund metrics into batches, the
// contract aggregates them homomorphically, and an external
// oracle decrypts a committed snapshot through an asynchronous
// request / callback pair.
// ============================================================

#[multiversx_sc::contract]
pub trait ConfidentialFund:
    access_control::AccessControlModule
    + cooldown::CooldownModule
    + encrypted::EncryptedValueModule
    + batch::BatchModule
    + aggregator::FundAggregatorModule
    + decryption::DecryptionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        fhe_engine_address: ManagedAddress,
        decryption_oracle_address: ManagedAddress,
        proof_verifier_address: ManagedAddress,
        cooldown_seconds: u64,
    ) {
        self.store_capabilities(
            &fhe_engine_address,
            &decryption_oracle_address,
            &proof_verifier_address,
        );

        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);
        self.providers().insert(deployer);

        self.cooldown_seconds().set(cooldown_seconds);
        self.current_batch_id().set(0u64);
        self.batch_open().set(false);
        self.paused().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setCapabilities
    // Re-points the engine, oracle and verifier. Stored handles
    // and pending contexts are left untouched.
    // ========================================================

    #[endpoint(setCapabilities)]
    fn set_capabilities(
        &self,
        fhe_engine_address: ManagedAddress,
        decryption_oracle_address: ManagedAddress,
        proof_verifier_address: ManagedAddress,
    ) {
        self.require_owner();
        self.store_capabilities(
            &fhe_engine_address,
            &decryption_oracle_address,
            &proof_verifier_address,
        );
        self.capabilities_changed_event(
            &fhe_engine_address,
            &decryption_oracle_address,
            &proof_verifier_address,
        );
    }

    fn store_capabilities(
        &self,
        fhe_engine_address: &ManagedAddress,
        decryption_oracle_address: &ManagedAddress,
        proof_verifier_address: &ManagedAddress,
    ) {
        require!(
            !fhe_engine_address.is_zero()
                && !decryption_oracle_address.is_zero()
                && !proof_verifier_address.is_zero(),
            ERR_INVALID_INPUT
        );

        self.fhe_engine_address().set(fhe_engine_address);
        self.decryption_oracle_address()
            .set(decryption_oracle_address);
        self.proof_verifier_address().set(proof_verifier_address);
    }

    #[view(getCapabilities)]
    fn get_capabilities(&self) -> MultiValue3<ManagedAddress, ManagedAddress, ManagedAddress> {
        (
            self.fhe_engine_address().get(),
            self.decryption_oracle_address().get(),
            self.proof_verifier_address().get(),
        )
            .into()
    }

    #[event("capabilitiesChanged")]
    fn capabilities_changed_event(
        &self,
        #[indexed] fhe_engine_address: &ManagedAddress,
        #[indexed] decryption_oracle_address: &ManagedAddress,
        #[indexed] proof_verifier_address: &ManagedAddress,
    );
}
