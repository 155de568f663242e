//! Application services and ports for the editable profile form.

#![forbid(unsafe_code)]

mod profile_form_controller;
mod profile_ports;
mod root_controller;

pub use profile_form_controller::{FormMode, FormPhase, ProfileFormController};
pub use profile_ports::{
    ImagePicker, PickerChoice, ProfileFormView, ProfileStore, ReferenceFetcher, RootButton,
    RootView,
};
pub use root_controller::{CHANGE_PROFILE_BUTTON_TITLE, REGISTER_BUTTON_TITLE, RootController};
