pub mod u001_contact_form;
pub mod u002_newsletter;
