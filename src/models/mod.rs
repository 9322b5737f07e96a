pub mod order;
pub mod table;

pub use order::{NewOrder, Order, OrderSubmission};
pub use table::{Cell, Column, KeyKind, Row, Table};
