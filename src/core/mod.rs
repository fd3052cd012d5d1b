pub mod table;

pub use table::PrettyTable;
