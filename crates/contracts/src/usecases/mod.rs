pub mod common;
pub mod u001_contact;
pub mod u002_newsletter;
