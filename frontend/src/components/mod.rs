pub mod layout;
pub mod section;
pub mod toast;
