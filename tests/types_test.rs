use confidential_fund::types::{EncryptedValue, Fund, COMMITMENT_BYTES_LEN};

#[test]
fn uninitialized_commits_to_zero_bytes() {
    assert_eq!(
        EncryptedValue::Uninitialized.commitment_bytes(),
        [0u8; COMMITMENT_BYTES_LEN]
    );
}

#[test]
fn handle_commitment_is_tagged() {
    // Handle 0 must not collide with an uninitialized value.
    assert_eq!(
        EncryptedValue::Handle(0).commitment_bytes(),
        [1, 0, 0, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(
        EncryptedValue::Handle(0x0102).commitment_bytes(),
        [1, 0, 0, 0, 0, 0, 0, 1, 2]
    );
}

#[test]
fn committed_handles_follow_fixed_order() {
    let fund = Fund {
        total_assets: EncryptedValue::Handle(1),
        manager_fee_rate: EncryptedValue::Handle(2),
        performance_fee_rate: EncryptedValue::Handle(3),
        high_water_mark: EncryptedValue::Handle(4),
    };

    let handles = fund.committed_handles(EncryptedValue::Uninitialized);
    let ids: Vec<Option<u64>> = handles.iter().map(|value| value.handle_id()).collect();
    assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4), None]);
}

#[test]
fn default_fund_is_uninitialized() {
    let fund = Fund::default();
    assert!(!fund.is_initialized());
    assert_eq!(fund.high_water_mark, EncryptedValue::Uninitialized);
}

#[test]
fn default_value_is_uninitialized() {
    let value = EncryptedValue::default();
    assert!(!value.is_initialized());
    assert_eq!(value.handle_id(), None);
}
