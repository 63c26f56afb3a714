#![forbid(unsafe_code)]

pub mod evaluation_order;
pub mod ic_type;
pub mod register_requirement;

/// The type used to count registers. Requirements are never negative.
pub type RegisterSize = usize;

/// Name of the implicit receiver inside of virtual methods
pub const THIS: &str = "this";

/// Name of the field used to query an array's length
pub const LENGTH: &str = "length";
