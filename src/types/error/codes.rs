pub const INTERNAL: u32 = 1;
pub const READONLY_MODE: u32 = 2;

pub const INVALID_FORM_BODY: u32 = 10;
pub const UNAUTHORIZED: u32 = 11;
pub const FORBIDDEN: u32 = 12;
pub const NOT_FOUND: u32 = 13;

pub const INVALID_CREDENTIALS: u32 = 20;
pub const USER_EXISTS: u32 = 21;
