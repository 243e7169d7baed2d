mod core;

pub(crate) use self::core::*;
