//! Domain entities and invariants of the editable profile form.

#![forbid(unsafe_code)]

mod catalog;
mod form;
mod form_state;
mod model_factory;
mod picture;
mod profile;
pub mod validation;

pub use catalog::{Attribute, AttributeCatalog, AttributeGroup, Location, LocationCatalog};
pub use form::{FieldContent, FieldKind, FormElement};
pub use form_state::FormState;
pub use model_factory::{ProfileValidationError, create_profile};
pub use picture::Picture;
pub use profile::UserProfile;
pub use validation::{FieldError, MANDATORY_KINDS};
