/// Role carried by tokens issued on admin login.
pub const ROLE_ADMIN: &str = "admin";
