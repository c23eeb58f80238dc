// Form Fields
// Closed set of editable fields and the pure update applied to a draft

use crate::models::UserData;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A field of the user draft that the form can write to.
///
/// `geo` has no entry here; coordinates pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Name,
    Email,
    Username,
    Phone,
    Website,
    Company,
    Street,
    City,
    Suite,
    Zipcode,
}

impl UserField {
    /// Every editable field.
    pub const ALL: [UserField; 10] = [
        UserField::Name,
        UserField::Email,
        UserField::Username,
        UserField::Phone,
        UserField::Website,
        UserField::Company,
        UserField::Street,
        UserField::City,
        UserField::Suite,
        UserField::Zipcode,
    ];

    /// Inputs shown in the modal, in tab order.
    pub const FORM_INPUTS: [UserField; 8] = [
        UserField::Name,
        UserField::Email,
        UserField::Username,
        UserField::Phone,
        UserField::Website,
        UserField::Company,
        UserField::Street,
        UserField::City,
    ];

    /// Fields that must be non-empty before a draft can be submitted.
    pub const REQUIRED: [UserField; 3] = [UserField::Name, UserField::Email, UserField::Username];

    /// Input name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Username => "username",
            UserField::Phone => "phone",
            UserField::Website => "website",
            UserField::Company => "company",
            UserField::Street => "street",
            UserField::City => "city",
            UserField::Suite => "suite",
            UserField::Zipcode => "zipcode",
        }
    }

    /// Placeholder text for the input.
    pub fn label(&self) -> &'static str {
        match self {
            UserField::Name => "Name",
            UserField::Email => "Email",
            UserField::Username => "Username",
            UserField::Phone => "Phone",
            UserField::Website => "Website",
            UserField::Company => "Company",
            UserField::Street => "Street",
            UserField::City => "City",
            UserField::Suite => "Suite",
            UserField::Zipcode => "Zipcode",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Current value of this field in `draft`.
    pub fn value<'a>(&self, draft: &'a UserData) -> &'a str {
        match self {
            UserField::Name => &draft.name,
            UserField::Email => &draft.email,
            UserField::Username => &draft.username,
            UserField::Phone => &draft.phone,
            UserField::Website => &draft.website,
            UserField::Company => &draft.company.name,
            UserField::Street => &draft.address.street,
            UserField::City => &draft.address.city,
            UserField::Suite => &draft.address.suite,
            UserField::Zipcode => &draft.address.zipcode,
        }
    }

    /// Return a copy of `draft` with only this field replaced by `value`.
    ///
    /// Nested fields keep their siblings: writing `Company` touches `company.name`
    /// only, and the address fields leave the rest of `address` (including `geo`) alone.
    pub fn apply(&self, draft: &UserData, value: impl Into<String>) -> UserData {
        let value = value.into();
        let mut next = draft.clone();
        match self {
            UserField::Name => next.name = value,
            UserField::Email => next.email = value,
            UserField::Username => next.username = value,
            UserField::Phone => next.phone = value,
            UserField::Website => next.website = value,
            UserField::Company => next.company.name = value,
            UserField::Street => next.address.street = value,
            UserField::City => next.address.city = value,
            UserField::Suite => next.address.suite = value,
            UserField::Zipcode => next.address.zipcode = value,
        }
        next
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown user field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for UserField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Company, Geo};

    fn filled_draft() -> UserData {
        UserData {
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
            username: "Bret".to_string(),
            phone: "1-770-736-8031".to_string(),
            website: "hildegard.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
            },
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_company_sets_nested_name() {
        let draft = UserField::Company.apply(&UserData::default(), "Acme");
        assert_eq!(
            draft.company,
            Company {
                name: "Acme".to_string()
            }
        );
        assert_eq!(
            UserData {
                company: Company::default(),
                ..draft
            },
            UserData::default()
        );
    }

    #[test]
    fn test_address_edits_keep_siblings() {
        let draft = UserField::Street.apply(&UserData::default(), "Main St");
        let draft = UserField::City.apply(&draft, "Springfield");
        assert_eq!(
            draft.address,
            Address {
                street: "Main St".to_string(),
                city: "Springfield".to_string(),
                suite: String::new(),
                zipcode: String::new(),
                geo: Geo::default(),
            }
        );
    }

    #[test]
    fn test_address_edit_preserves_geo() {
        let before = filled_draft();
        let after = UserField::Zipcode.apply(&before, "00000");
        assert_eq!(after.address.geo, before.address.geo);
        assert_eq!(after.address.suite, "Apt. 556");
        assert_eq!(after.address.zipcode, "00000");
    }

    #[test]
    fn test_each_field_changes_only_itself() {
        let before = filled_draft();
        for field in UserField::ALL {
            let after = field.apply(&before, "changed");
            assert_eq!(field.value(&after), "changed", "{field}");
            for other in UserField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(other.value(&after), other.value(&before), "{field} -> {other}");
            }
            assert_eq!(after.address.geo, before.address.geo);
        }
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let before = filled_draft();
        let _ = UserField::Name.apply(&before, "Someone Else");
        assert_eq!(before, filled_draft());
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!("company".parse::<UserField>().unwrap(), UserField::Company);
        assert_eq!("zipcode".parse::<UserField>().unwrap(), UserField::Zipcode);
        for field in UserField::ALL {
            assert_eq!(field.as_str().parse::<UserField>().unwrap(), field);
        }
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = "geo".parse::<UserField>().unwrap_err();
        assert_eq!(err, ParseFieldError("geo".to_string()));
    }

    #[test]
    fn test_required_fields() {
        assert!(UserField::Name.is_required());
        assert!(UserField::Username.is_required());
        assert!(!UserField::Company.is_required());
    }
}
