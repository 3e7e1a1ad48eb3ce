pub mod application;
pub mod config;
pub mod contact;
pub mod form;
pub mod window;

pub use application::{ContactFormApplication, init_logging};
pub use config::ContactFormConfig;
pub use contact::{ContactField, ContactForm, ContactFormValues, ContactFormView};
pub use window::ContactFormWindow;
