use biblio_core::{Identity, Role};

mod navigation;
mod search_sequencer;

pub(crate) fn identity(id: &str, role: Role) -> Identity {
    Identity {
        id: id.to_string(),
        email: format!("{id}@library.test"),
        role,
        first_name: String::from("Ada"),
        last_name: String::from("Lovelace"),
    }
}
