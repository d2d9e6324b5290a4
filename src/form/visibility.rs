use crate::domain::{FormField, FormValues, Gender};

/// The other-gender input is shown only while "Other" is selected.
pub fn derive_show_other_gender(values: &FormValues) -> bool {
    Gender::is_other(&values.gender)
}

/// Fields rendered for the given visibility flag, in display order.
pub fn visible_fields(show_other_gender: bool) -> Vec<FormField> {
    FormField::ALL
        .into_iter()
        .filter(|field| show_other_gender || *field != FormField::OtherGender)
        .collect()
}
