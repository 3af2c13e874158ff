mod arena;
mod handle;
mod iter;
mod node;
mod query;
mod raw_wbtree;
mod rebalance;
mod size;

pub(crate) use iter::InOrder;
pub(crate) use raw_wbtree::RawWBTree;
