multiversx_sc::imports!();

use crate::types::{CooldownClass, EncryptedValue, Fund};

// ============================================================
// Fund aggregator: homomorphic update rules per submission.
//
//   total_assets     += input   (sum across providers)
//   fee rates         = input   (last writer wins in a batch)
//   high_water_mark   = select(input >= hwm, input, hwm)
// ============================================================

#[multiversx_sc::module]
pub trait FundAggregatorModule:
    crate::access_control::AccessControlModule
    + crate::cooldown::CooldownModule
    + crate::encrypted::EncryptedValueModule
    + crate::batch::BatchModule
{
    #[endpoint(submitFundState)]
    fn submit_fund_state(
        &self,
        total_assets: EncryptedValue,
        manager_fee_rate: EncryptedValue,
        performance_fee_rate: EncryptedValue,
    ) {
        let provider = self.require_provider();
        self.require_not_paused();
        self.check_and_record(&provider, CooldownClass::Submission);
        self.require_batch_open();
        self.require_initialized(total_assets);
        self.require_initialized(manager_fee_rate);
        self.require_initialized(performance_fee_rate);

        let batch_id = self.current_batch_id().get();
        let mut fund = self.load_fund(batch_id);
        self.init_fund_fields(&mut fund);

        fund.total_assets = self.fhe_add(fund.total_assets, total_assets);

        fund.manager_fee_rate = manager_fee_rate;
        fund.performance_fee_rate = performance_fee_rate;

        let is_higher = self.fhe_compare_ge(total_assets, fund.high_water_mark);
        fund.high_water_mark = self.fhe_select(is_higher, total_assets, fund.high_water_mark);

        self.funds(batch_id).set(&fund);
        self.fund_state_submitted_event(batch_id, &provider, &fund);
    }

    /// First touch of a batch: every field starts as an encrypted zero.
    fn init_fund_fields(&self, fund: &mut Fund) {
        for field in [
            &mut fund.total_assets,
            &mut fund.manager_fee_rate,
            &mut fund.performance_fee_rate,
            &mut fund.high_water_mark,
        ] {
            if !field.is_initialized() {
                *field = self.fhe_encode(0);
            }
        }
    }

    #[event("fundStateSubmitted")]
    fn fund_state_submitted_event(
        &self,
        #[indexed] batch_id: u64,
        #[indexed] provider: &ManagedAddress,
        fund: &Fund,
    );
}
