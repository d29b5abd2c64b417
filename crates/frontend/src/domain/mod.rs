pub mod a001_article;
pub mod a002_project;
pub mod a003_certificate;
