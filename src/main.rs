use contact_form::{ContactFormApplication, ContactFormConfig};

fn main() {
    ContactFormApplication::new()
        .with_config(ContactFormConfig::from_env())
        .run();
}
