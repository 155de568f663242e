mod reference;
mod store;
mod view;

pub use reference::ReferenceFetcher;
pub use store::ProfileStore;
pub use view::{ImagePicker, PickerChoice, ProfileFormView, RootButton, RootView};
