#![allow(dead_code)]

use contact_form::form::FormModel;

#[derive(FormModel)]
struct EmptyRename {
    #[form(rename = "")]
    email: String,
}

fn main() {}
