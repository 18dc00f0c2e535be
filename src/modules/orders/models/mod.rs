mod order;

pub use order::{Order, OrderCountQuery, OrderStatus, SalesRank, AUTO_CANCEL_REASON};
