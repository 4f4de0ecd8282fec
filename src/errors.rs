pub const ERR_NOT_OWNER: &str = "Caller is not the owner";
pub const ERR_NOT_PROVIDER: &str = "Caller is not a provider";
pub const ERR_PAUSED: &str = "Contract is paused";
pub const ERR_COOLDOWN_ACTIVE: &str = "Cooldown active";
pub const ERR_BATCH_NOT_OPEN: &str = "Batch not open";
pub const ERR_INVALID_INPUT: &str = "Invalid input";
pub const ERR_REPLAY_DETECTED: &str = "Replay detected";
pub const ERR_STATE_MISMATCH: &str = "State mismatch";
pub const ERR_DECRYPTION_FAILED: &str = "Decryption failed";
