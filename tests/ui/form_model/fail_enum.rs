#![allow(dead_code)]

use contact_form::form::FormModel;

#[derive(FormModel)]
enum EnumForm {
    Email,
}

fn main() {}
