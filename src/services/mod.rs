pub mod order_service;
pub use order_service::{OrderError, OrderService};

pub mod order_service_impl;
pub use order_service_impl::SeaOrmOrderService;
