pub mod home;
pub mod illustration;
pub mod navbar;
pub mod pages;
pub mod status_bar;
pub mod translate_page;
