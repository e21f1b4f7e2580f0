pub(crate) mod date;
pub(crate) mod debug;

pub(crate) use date::parse_date;
pub(crate) use debug::{parse_debug_enabled, set_parse_debug};
