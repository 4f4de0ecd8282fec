multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_INPUT, ERR_NOT_OWNER, ERR_NOT_PROVIDER, ERR_PAUSED};

// ============================================================
// Access control: one transferable owner, a provider set,
// and the global pause switch.
// ============================================================

#[multiversx_sc::module]
pub trait AccessControlModule {
    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_INVALID_INPUT);

        let previous_owner = self.owner().get();
        self.owner().set(&new_owner);
        self.ownership_transferred_event(&previous_owner, &new_owner);

        // The owner is always a provider; removal of that role is blocked below.
        if self.providers().insert(new_owner.clone()) {
            self.provider_added_event(&new_owner, false, true);
        }
    }

    #[endpoint(addProvider)]
    fn add_provider(&self, provider: ManagedAddress) {
        self.require_owner();
        require!(!provider.is_zero(), ERR_INVALID_INPUT);

        let was_provider = !self.providers().insert(provider.clone());
        self.provider_added_event(&provider, was_provider, true);
    }

    #[endpoint(removeProvider)]
    fn remove_provider(&self, provider: ManagedAddress) {
        self.require_owner();
        require!(!provider.is_zero(), ERR_INVALID_INPUT);
        require!(provider != self.owner().get(), ERR_INVALID_INPUT);

        let was_provider = self.providers().swap_remove(&provider);
        self.provider_removed_event(&provider, was_provider, false);
    }

    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        self.require_owner();

        let previous = self.paused().get();
        self.paused().set(paused);
        self.paused_changed_event(previous, paused);
    }

    // ========================================================
    // Guards
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_NOT_OWNER);
    }

    fn require_provider(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.providers().contains(&caller), ERR_NOT_PROVIDER);
        caller
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    // ========================================================
    // Views
    // ========================================================

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(isProvider)]
    fn is_provider(&self, address: &ManagedAddress) -> bool {
        self.providers().contains(address)
    }

    #[view(getProviders)]
    fn get_providers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for provider in self.providers().iter() {
            result.push(provider);
        }
        result
    }

    #[view(isPaused)]
    fn is_paused(&self) -> bool {
        self.paused().get()
    }

    // ========================================================
    // Events
    // ========================================================

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[event("providerAdded")]
    fn provider_added_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] was_provider: bool,
        is_provider: bool,
    );

    #[event("providerRemoved")]
    fn provider_removed_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] was_provider: bool,
        is_provider: bool,
    );

    #[event("pausedChanged")]
    fn paused_changed_event(&self, #[indexed] previous: bool, current: bool);

    // ========================================================
    // Storage
    // ========================================================

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("providers")]
    fn providers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;
}
