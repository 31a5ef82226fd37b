// Contact Form
// Controlled form buffer for the contact modal

use serde::Serialize;

use super::catalog::PropertyRecord;

/// Editable fields of the contact form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Message => "Message",
        }
    }

    /// Presence is the only validation
    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Phone)
    }

    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Phone,
            ContactField::Phone => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Phone => ContactField::Email,
            ContactField::Message => ContactField::Phone,
        }
    }
}

/// The payload handed to the submission target
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub property_id: String,
}

impl ContactForm {
    /// Fresh draft for `property`: contact details blank, message templated
    pub fn for_property(property: &PropertyRecord) -> Self {
        Self {
            message: inquiry_message(property),
            property_id: property.id.clone(),
            ..Self::default()
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Required fields that are blank, in focus order
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field(*f).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Deterministic inquiry text for a listing
pub fn inquiry_message(property: &PropertyRecord) -> String {
    format!(
        "I'm interested in {} located in {}. Please provide more information.",
        property.title, property.location
    )
}
