#![allow(dead_code)]

use contact_form::form::FormModel;

#[derive(FormModel)]
struct GenericForm<T> {
    value: T,
}

fn main() {}
