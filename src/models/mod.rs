pub mod block;
pub mod catalog;
pub mod category;
pub mod header;
pub mod period;
pub mod row;

pub use block::{DraggedBlock, EventBlock};
pub use category::Category;
pub use header::Header;
pub use period::Period;
pub use row::Row;
