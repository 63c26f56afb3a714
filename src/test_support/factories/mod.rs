// This is intended to be used as a prelude, to get all of the factories in one shot.

mod call_node;
mod class_node;
mod local_var_node;
mod method_node;
mod var_node;

pub use call_node::*;
pub use class_node::*;
pub use local_var_node::*;
pub use method_node::*;
pub use var_node::*;
