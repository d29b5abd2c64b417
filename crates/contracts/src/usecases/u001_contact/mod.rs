pub mod request;

pub use request::ContactRequest;
