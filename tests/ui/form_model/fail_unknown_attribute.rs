#![allow(dead_code)]

use contact_form::form::FormModel;

#[derive(FormModel)]
struct UnknownAttribute {
    #[form(skip)]
    email: String,
}

fn main() {}
