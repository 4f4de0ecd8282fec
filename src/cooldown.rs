multiversx_sc::imports!();

use crate::errors::ERR_COOLDOWN_ACTIVE;
use crate::types::CooldownClass;

// ============================================================
// Cooldown guard: per-actor, per-class rate limiting.
//
// Checking and recording are separate steps so each endpoint
// controls where the timestamp is written: submissions record
// before the body, decryption requests record after it.
// ============================================================

#[multiversx_sc::module]
pub trait CooldownModule: crate::access_control::AccessControlModule {
    #[endpoint(setCooldown)]
    fn set_cooldown(&self, cooldown_seconds: u64) {
        self.require_owner();

        let previous = self.cooldown_seconds().get();
        self.cooldown_seconds().set(cooldown_seconds);
        self.cooldown_changed_event(previous, cooldown_seconds);
    }

    fn require_cooldown_elapsed(&self, actor: &ManagedAddress, class: CooldownClass) {
        let last_action = self.last_action_time(actor, class);
        if last_action.is_empty() {
            return;
        }

        let now = self.blockchain().get_block_timestamp();
        let window_end = last_action
            .get()
            .saturating_add(self.cooldown_seconds().get());
        require!(now >= window_end, ERR_COOLDOWN_ACTIVE);
    }

    fn record_action(&self, actor: &ManagedAddress, class: CooldownClass) {
        let now = self.blockchain().get_block_timestamp();
        self.last_action_time(actor, class).set(now);
    }

    fn check_and_record(&self, actor: &ManagedAddress, class: CooldownClass) {
        self.require_cooldown_elapsed(actor, class);
        self.record_action(actor, class);
    }

    #[view(getCooldownSeconds)]
    fn get_cooldown_seconds(&self) -> u64 {
        self.cooldown_seconds().get()
    }

    /// Zero when the actor never completed an action of this class.
    #[view(getLastActionTime)]
    fn get_last_action_time(&self, actor: &ManagedAddress, class: CooldownClass) -> u64 {
        self.last_action_time(actor, class).get()
    }

    #[event("cooldownChanged")]
    fn cooldown_changed_event(&self, #[indexed] previous: u64, current: u64);

    #[storage_mapper("cooldownSeconds")]
    fn cooldown_seconds(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("lastActionTime")]
    fn last_action_time(
        &self,
        actor: &ManagedAddress,
        class: CooldownClass,
    ) -> SingleValueMapper<u64>;
}
