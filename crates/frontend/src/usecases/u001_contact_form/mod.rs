pub mod view;

pub use view::ContactForm;
