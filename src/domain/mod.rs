mod values;

pub use values::{ErrorMap, FormField, FormValues, Gender, PersonalInfo};
