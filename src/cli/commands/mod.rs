mod normalize;
mod orders;
mod submit;

pub use normalize::cmd_normalize;
pub use orders::cmd_list_orders;
pub use submit::cmd_submit_order;
