use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use editable_profile_core::AppError;
use editable_profile_domain::FieldKind;

pub const HELP: &str = "\
root commands:
  register                 open an empty profile form
  edit                     open the stored profile
  unregister               remove the stored profile
  quit                     exit
form commands:
  show                     print every field
  set <field> [text]       type into a text field, or query cities for location
  tap <field> [path]       open a picker, toggle the image switch, or pick an image file
  choose <field> <id>      select a picker option by id
  date <field> YYYY-MM-DD  select a date
  done                     validate and save
  cancel                   close without saving";

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register,
    Edit,
    Unregister,
    Show,
    Set { kind: FieldKind, text: Option<String> },
    Tap { kind: FieldKind, argument: Option<String> },
    Choose { kind: FieldKind, id: String },
    Date { kind: FieldKind, date: DateTime<Utc> },
    Done,
    Cancel,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = split_word(line);

        let command = match verb {
            "register" => Self::Register,
            "edit" => Self::Edit,
            "unregister" => Self::Unregister,
            "show" => Self::Show,
            "done" => Self::Done,
            "cancel" => Self::Cancel,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "set" => {
                let (kind, text) = field_and_rest(verb, rest)?;
                Self::Set { kind, text }
            }
            "tap" => {
                let (kind, argument) = field_and_rest(verb, rest)?;
                Self::Tap { kind, argument }
            }
            "choose" => {
                let (kind, id) = field_and_rest(verb, rest)?;
                let id = id.ok_or_else(|| {
                    AppError::Validation("choose requires an option id".to_owned())
                })?;
                Self::Choose { kind, id }
            }
            "date" => {
                let (kind, value) = field_and_rest(verb, rest)?;
                let value = value.ok_or_else(|| {
                    AppError::Validation("date requires a value like 1990-01-15".to_owned())
                })?;
                Self::Date {
                    kind,
                    date: parse_date(value.as_str())?,
                }
            }
            "" => return Err(AppError::Validation("empty command".to_owned())),
            other => {
                return Err(AppError::Validation(format!(
                    "unknown command '{other}', type 'help'"
                )));
            }
        };

        Ok(command)
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn field_and_rest(verb: &str, input: &str) -> Result<(FieldKind, Option<String>), AppError> {
    let (field, rest) = split_word(input);
    if field.is_empty() {
        return Err(AppError::Validation(format!("{verb} requires a field name")));
    }

    let kind = FieldKind::from_str(field)?;
    let rest = (!rest.is_empty()).then(|| rest.to_owned());
    Ok((kind, rest))
}

fn parse_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or_else(|| AppError::Validation(format!("invalid date '{value}', use YYYY-MM-DD")))
}
