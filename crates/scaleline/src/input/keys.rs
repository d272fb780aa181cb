//! Key codes as delivered by DOM `KeyboardEvent.keyCode`.

pub const LEFT: u32 = 37;
pub const RIGHT: u32 = 39;
pub const K: u32 = 75;
pub const M: u32 = 77;
pub const O: u32 = 79;
pub const P: u32 = 80;
pub const S: u32 = 83;
