use editable_profile_application::{PickerChoice, ProfileFormView, RootButton, RootView};
use editable_profile_domain::{FieldContent, FieldKind, FormElement};

/// Prints the root screen and the profile form to stdout.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }

    pub fn notice(&self, message: &str) {
        println!("! {message}");
    }
}

impl ProfileFormView for ConsoleView {
    fn render(&self, elements: &[FormElement]) {
        println!("-- profile --");
        for element in elements {
            println!("  {}", describe(element));
        }
    }

    fn render_one(&self, element: &FormElement) {
        println!("  {}", describe(element));
    }

    fn show_picker(&self, kind: FieldKind, choices: &[PickerChoice]) {
        if choices.is_empty() {
            println!("[{}] no options available", kind.as_str());
            return;
        }

        println!("[{}] choose one of:", kind.as_str());
        for choice in choices {
            println!("    {:<12} {}", choice.id, choice.title);
        }
    }

    fn show_date_picker(&self, kind: FieldKind) {
        println!("[{}] enter: date {} YYYY-MM-DD", kind.as_str(), kind.as_str());
    }

    fn dismiss_picker(&self) {}

    fn show_field_error(&self, kind: FieldKind, message: &str) {
        println!("  x {}: {message}", kind.as_str());
    }

    fn show_general_error(&self, message: &str) {
        self.notice(message);
    }

    fn close(&self) {
        println!("-- profile closed --");
    }
}

impl RootView for ConsoleView {
    fn show_buttons(&self, register: RootButton, change_profile: RootButton) {
        println!("== editable profile ==");
        for (command, button) in [("register", register), ("edit", change_profile)] {
            if !button.is_hidden {
                println!("  {command:<10} {}", button.title);
            }
        }
    }
}

pub(crate) fn describe(element: &FormElement) -> String {
    let kind = element.kind().as_str();
    let value = match element {
        FormElement::ProfileImage(picture) | FormElement::SecondaryImage(picture) => picture
            .as_ref()
            .map(|picture| format!("image, {} bytes", picture.len())),
        FormElement::ImageRoleSwitch(swapped) => {
            Some(String::from(if *swapped { "on" } else { "off" }))
        }
        FormElement::Location(content) => content.value().map(|location| {
            format!("{} ({}, {})", location.city(), location.lat(), location.lon())
        }),
        FormElement::BirthDay(content) => content
            .value()
            .map(|date| date.format("%Y-%m-%d").to_string()),
        FormElement::DoneButton { label } => Some(format!("[{label}]")),
        other => other
            .text_content()
            .and_then(FieldContent::value)
            .filter(|text| !text.is_empty())
            .cloned()
            .or_else(|| {
                other
                    .attribute_content()
                    .and_then(FieldContent::value)
                    .map(|attribute| format!("{} ({})", attribute.name(), attribute.id()))
            }),
    };

    match value {
        Some(value) => format!("{kind}: {value}"),
        None => format!("{kind}: <{}>", element.placeholder()),
    }
}
