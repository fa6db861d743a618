//! Row models

use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const LAST_LOGIN_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// One row of the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub ssn: String,
    pub password: String,
    pub ip: String,
    pub last_login: PrimitiveDateTime,
    pub user_agent: String,
}

impl UserRow {
    /// Render the row as a delimited log message.
    ///
    /// This is the boundary contract with the redacting logger: every
    /// default PII field appears as `field=value`, pairs are separated by
    /// `; `, field order is fixed, and values must not contain the
    /// separator character.
    pub fn to_message(&self) -> String {
        format!(
            "name={}; email={}; phone={}; ssn={}; password={}; ip={}; last_login={}; user_agent={}",
            self.name,
            self.email,
            self.phone,
            self.ssn,
            self.password,
            self.ip,
            self.last_login.format(LAST_LOGIN_FORMAT).unwrap_or_default(),
            self.user_agent,
        )
    }
}
