#![no_std]

multiversx_sc::imports!();

pub mod fhe_engine_mock_proxy;

/// Stand-in for the FHE engine in tests. Every "ciphertext" is a
/// plaintext kept in storage under a sequential handle id; id 0 is never issued.
#[multiversx_sc::contract]
pub trait FheEngineMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(encode)]
    fn encode(&self, plaintext: u64) -> u64 {
        self.issue(plaintext)
    }

    #[endpoint(add)]
    fn add(&self, lhs: u64, rhs: u64) -> u64 {
        let sum = self.reveal(lhs) + self.reveal(rhs);
        self.issue(sum)
    }

    #[endpoint(compareGe)]
    fn compare_ge(&self, lhs: u64, rhs: u64) -> u64 {
        let is_ge = self.reveal(lhs) >= self.reveal(rhs);
        self.issue(is_ge as u64)
    }

    #[endpoint(select)]
    fn select(&self, condition: u64, if_true: u64, if_false: u64) -> u64 {
        let chosen = if self.reveal(condition) != 0 {
            self.reveal(if_true)
        } else {
            self.reveal(if_false)
        };
        self.issue(chosen)
    }

    #[view(isInitialized)]
    fn is_initialized(&self, handle: u64) -> bool {
        handle != 0 && handle <= self.last_handle().get()
    }

    #[view(reveal)]
    fn reveal(&self, handle: u64) -> u64 {
        require!(self.is_initialized(handle), "Unknown handle");
        self.plaintexts(handle).get()
    }

    fn issue(&self, plaintext: u64) -> u64 {
        let handle = self.last_handle().update(|last| {
            *last += 1;
            *last
        });
        self.plaintexts(handle).set(plaintext);
        handle
    }

    #[storage_mapper("lastHandle")]
    fn last_handle(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("plaintexts")]
    fn plaintexts(&self, handle: u64) -> SingleValueMapper<u64>;
}
