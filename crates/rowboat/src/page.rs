use crate::record::Record;

/// One page of records plus paging bookkeeping, produced by
/// [`QueryBuilder::paginate`](crate::QueryBuilder::paginate).
#[derive(Debug)]
pub struct Page {
    pub data: Vec<Record>,
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
}

impl Page {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
