#![forbid(unsafe_code)]

pub mod compiler;

#[cfg(test)]
pub mod test_support;
