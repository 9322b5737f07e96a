pub mod prelude;

pub mod repairs;
