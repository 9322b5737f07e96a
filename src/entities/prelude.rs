pub use super::repairs::Entity as Repairs;
