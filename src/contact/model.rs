use gpui::SharedString;

use crate::form::{FieldKey, FieldLens, FormModel};

/// Current values of the contact form.
#[derive(Clone, Debug, Default, Eq, PartialEq, FormModel)]
pub struct ContactFormValues {
    #[form(rename = "firstName")]
    pub first_name: SharedString,
    #[form(rename = "lastName")]
    pub last_name: SharedString,
    pub email: SharedString,
    pub message: SharedString,
}

impl ContactFormValues {
    pub fn get(&self, field: ContactField) -> &SharedString {
        let fields = Self::fields();
        match field {
            ContactField::FirstName => fields.first_name().get(self),
            ContactField::LastName => fields.last_name().get(self),
            ContactField::Email => fields.email().get(self),
            ContactField::Message => fields.message().get(self),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn key(self) -> FieldKey {
        let fields = ContactFormValues::fields();
        match self {
            ContactField::FirstName => fields.first_name().key(),
            ContactField::LastName => fields.last_name().key(),
            ContactField::Email => fields.email().key(),
            ContactField::Message => fields.message().key(),
        }
    }

    pub fn from_key(key: FieldKey) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    /// Placeholder text the inputs are looked up by. The message input has
    /// none and is addressed by its test id instead.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            ContactField::FirstName => Some("Edd"),
            ContactField::LastName => Some("Burke"),
            ContactField::Email => Some("bluebill1049@hotmail.com"),
            ContactField::Message => None,
        }
    }

    pub fn input_test_id(self) -> Option<&'static str> {
        match self {
            ContactField::Message => Some("message"),
            _ => None,
        }
    }

    pub fn output_test_id(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstnameDisplay",
            ContactField::LastName => "lastnameDisplay",
            ContactField::Email => "emailDisplay",
            ContactField::Message => "messageDisplay",
        }
    }
}
