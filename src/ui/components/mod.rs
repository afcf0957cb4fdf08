pub mod grid;
pub mod toast;
