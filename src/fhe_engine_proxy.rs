use multiversx_sc::proxy_imports::*;

pub struct FheEngineProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FheEngineProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FheEngineProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FheEngineProxyMethods { wrapped_tx: tx }
    }
}

pub struct FheEngineProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> FheEngineProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn encode<Arg0: ProxyArg<u64>>(
        self,
        plaintext: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("encode")
            .argument(&plaintext)
            .original_result()
    }

    pub fn add<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        lhs: Arg0,
        rhs: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("add")
            .argument(&lhs)
            .argument(&rhs)
            .original_result()
    }

    pub fn compare_ge<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        lhs: Arg0,
        rhs: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("compareGe")
            .argument(&lhs)
            .argument(&rhs)
            .original_result()
    }

    pub fn select<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>, Arg2: ProxyArg<u64>>(
        self,
        condition: Arg0,
        if_true: Arg1,
        if_false: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("select")
            .argument(&condition)
            .argument(&if_true)
            .argument(&if_false)
            .original_result()
    }

    pub fn is_initialized<Arg0: ProxyArg<u64>>(
        self,
        handle: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isInitialized")
            .argument(&handle)
            .original_result()
    }
}
