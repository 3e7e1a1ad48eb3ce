use contact_form::form::{FieldLens, FormModel};

#[derive(Clone, contact_form::form::FormModel)]
struct NewsletterForm {
    #[form(rename = "fullName")]
    full_name: String,
    opted_in: bool,
}

fn main() {
    let fields = NewsletterForm::fields();
    assert_eq!(fields.full_name().key().as_str(), "fullName");
    assert_eq!(fields.opted_in().key().as_str(), "opted_in");
    let keys = NewsletterForm::field_keys()
        .iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>();
    assert_eq!(keys, ["fullName", "opted_in"]);

    let mut model = NewsletterForm {
        full_name: String::new(),
        opted_in: false,
    };
    fields.opted_in().set(&mut model, true);
    assert!(*fields.opted_in().get(&model));
}
