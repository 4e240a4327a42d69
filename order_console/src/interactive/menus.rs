//! Interactive menu options.
//!
//! Commands must be unique across the menu; the run loop dispatches on the command string.
pub type Menu = (&'static str, &'static [&'static str]);

// Command aliases. Keep this list in alphabetical order.
pub mod commands {
    pub const ADD_PROFILE: &str = "Add profile";
    pub const CANCEL_EDIT: &str = "Cancel edit";
    pub const DELETE_ORDER: &str = "Delete order";
    pub const EDIT_ORDER: &str = "Edit order";
    pub const EXIT: &str = "Exit";
    pub const LIST_ORDERS: &str = "List orders";
    pub const NEW_ORDER: &str = "Place new order";
    pub const ORDER_BY_ID: &str = "Order by Id";
    pub const SUBMIT_FORM: &str = "Submit form again";
}

pub use commands::*;

pub const MAIN_MENU: [&str; 9] =
    [LIST_ORDERS, NEW_ORDER, EDIT_ORDER, SUBMIT_FORM, CANCEL_EDIT, DELETE_ORDER, ORDER_BY_ID, ADD_PROFILE, EXIT];

pub fn main_menu() -> &'static Menu {
    &("Orders", &MAIN_MENU)
}
