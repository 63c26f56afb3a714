pub mod register_counter_walker;
pub mod tree_printer;
pub mod tree_walker;
