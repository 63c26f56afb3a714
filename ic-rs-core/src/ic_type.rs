use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ustr::Ustr;

/// The primitive types of the IC language
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd)]
pub enum PrimitiveType {
    Int,
    Boolean,
    String,
    Void,
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::String => "string",
            PrimitiveType::Void => "void",
        };

        write!(f, "{s}")
    }
}

/// The element type of a type reference, before any array dimensions
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd)]
pub enum IcType {
    Primitive(PrimitiveType),

    /// A reference to a user-defined class
    Class(Ustr),
}

impl Display for IcType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IcType::Primitive(p) => write!(f, "{p}"),
            IcType::Class(name) => write!(f, "{name}"),
        }
    }
}

impl From<PrimitiveType> for IcType {
    fn from(p: PrimitiveType) -> Self {
        IcType::Primitive(p)
    }
}
