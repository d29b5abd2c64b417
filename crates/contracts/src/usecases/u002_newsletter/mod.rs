pub mod request;

pub use request::NewsletterRequest;
