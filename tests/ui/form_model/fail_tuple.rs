#![allow(dead_code)]

use contact_form::form::FormModel;

#[derive(FormModel)]
struct TupleForm(String);

fn main() {}
