pub mod contact;
pub mod copy;

pub use contact::{sync_contact, wire_contact_form};
pub use copy::{sync_copy, wire_copy_button};
