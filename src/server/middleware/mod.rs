//! Request authentication and cookie handling shared by the controllers.

pub mod auth;
pub mod cookie;

#[cfg(test)]
mod test;
