use multiversx_sc::proxy_imports::*;

pub struct DecryptionOracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DecryptionOracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DecryptionOracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DecryptionOracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct DecryptionOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> DecryptionOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Returns the request id the oracle will echo back in `onDecryptionResult`.
    pub fn request_decrypt<
        Arg0: ProxyArg<ManagedVec<Env::Api, u64>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        handles: Arg0,
        callback: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("requestDecrypt")
            .argument(&handles)
            .argument(&callback)
            .original_result()
    }
}
