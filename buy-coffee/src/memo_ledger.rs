multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Memo<M: ManagedTypeApi> {
    pub from: ManagedAddress<M>,
    pub timestamp: u64,
    pub name: ManagedBuffer<M>,
    pub message: ManagedBuffer<M>,
}

/// Append-only donation history. Entries are never edited or removed.
#[multiversx_sc::module]
pub trait MemoLedgerModule {
    fn append_memo(&self, memo: &Memo<Self::Api>) -> usize {
        self.memos().push(memo)
    }

    /// Unbounded, prefer `getMemosPage` once the ledger grows.
    #[view(getAllMemos)]
    fn get_all_memos(&self) -> MultiValueEncoded<Memo<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for memo in self.memos().iter() {
            result.push(memo);
        }

        result
    }

    #[view(getMemosCount)]
    fn get_memos_count(&self) -> usize {
        self.memos().len()
    }

    /// `start` is zero-based, in insertion order.
    #[view(getMemosPage)]
    fn get_memos_page(&self, start: usize, count: usize) -> MultiValueEncoded<Memo<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let memos_mapper = self.memos();
        let total = memos_mapper.len();
        if start >= total {
            return result;
        }

        let end = core::cmp::min(total, start.saturating_add(count));
        for index in start..end {
            // VecMapper indexes start at 1
            result.push(memos_mapper.get(index + 1));
        }

        result
    }

    #[storage_mapper("memos")]
    fn memos(&self) -> VecMapper<Memo<Self::Api>>;
}
