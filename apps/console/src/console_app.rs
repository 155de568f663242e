use std::path::PathBuf;
use std::sync::Arc;

use editable_profile_application::{
    FormMode, FormPhase, ProfileFormController, ProfileStore, ReferenceFetcher, RootController,
};
use editable_profile_core::{AppError, AppResult};
use editable_profile_domain::FieldKind;
use tracing::info;

use crate::command::{Command, HELP};
use crate::console_view::{ConsoleView, describe};
use crate::file_image_picker::FileImagePicker;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes console commands to the root screen or the open form session.
pub struct ConsoleApp {
    reference_fetcher: Arc<dyn ReferenceFetcher>,
    profile_store: Arc<dyn ProfileStore>,
    image_picker: Arc<FileImagePicker>,
    view: Arc<ConsoleView>,
    root: RootController,
    form: Option<ProfileFormController>,
}

impl ConsoleApp {
    pub fn new(
        reference_fetcher: Arc<dyn ReferenceFetcher>,
        profile_store: Arc<dyn ProfileStore>,
        image_picker: Arc<FileImagePicker>,
        view: Arc<ConsoleView>,
    ) -> Self {
        let root = RootController::new(profile_store.clone(), view.clone());
        Self {
            reference_fetcher,
            profile_store,
            image_picker,
            view,
            root,
            form: None,
        }
    }

    pub async fn start(&self) -> AppResult<()> {
        self.root.show().await
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn report(&self, error: &AppError) {
        self.view.notice(error.to_string().as_str());
    }

    pub async fn handle(&mut self, command: Command) -> AppResult<Flow> {
        match command {
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(Flow::Quit),
            Command::Register => self.open_form(FormMode::Register).await?,
            Command::Edit => {
                if !self.profile_store.is_registered().await? {
                    return Err(AppError::NotFound("no stored profile to change".to_owned()));
                }
                self.open_form(FormMode::Edit).await?;
            }
            Command::Unregister => {
                self.ensure_no_form()?;
                self.root.unregister().await?;
            }
            Command::Show => {
                let elements = self.form()?.elements().unwrap_or_default();
                for element in &elements {
                    println!("  {}", describe(element));
                }
            }
            Command::Set { kind, text } => self.form_mut()?.interact(kind, text).await?,
            Command::Tap { kind, argument } => self.tap(kind, argument).await?,
            Command::Choose { kind, id } => self.form_mut()?.select_choice(kind, id.as_str())?,
            Command::Date { kind, date } => self.form_mut()?.select_date(kind, date)?,
            Command::Done => {
                self.form_mut()?
                    .interact(FieldKind::DoneButton, None)
                    .await?;
            }
            Command::Cancel => self.form_mut()?.dismiss(),
        }

        self.close_finished_form().await?;
        Ok(Flow::Continue)
    }

    async fn open_form(&mut self, mode: FormMode) -> AppResult<()> {
        self.ensure_no_form()?;

        let mut form = ProfileFormController::new(
            self.reference_fetcher.clone(),
            self.profile_store.clone(),
            self.image_picker.clone(),
            self.view.clone(),
            mode,
        );
        info!(session_id = %form.session_id(), mode = ?mode, "opening profile form");
        form.load().await?;
        self.form = Some(form);
        Ok(())
    }

    async fn tap(&mut self, kind: FieldKind, argument: Option<String>) -> AppResult<()> {
        let form = self.form.as_mut().ok_or_else(no_form_error)?;
        if matches!(kind, FieldKind::ProfileImage | FieldKind::SecondaryImage) {
            self.image_picker.queue(argument.map(PathBuf::from));
            return form.interact(kind, None).await;
        }

        form.interact(kind, argument).await
    }

    async fn close_finished_form(&mut self) -> AppResult<()> {
        let is_closed = self
            .form
            .as_ref()
            .is_some_and(|form| form.phase() == FormPhase::Closed);
        if is_closed {
            self.form = None;
            self.root.show().await?;
        }
        Ok(())
    }

    fn ensure_no_form(&self) -> AppResult<()> {
        if self.form.is_some() {
            return Err(AppError::Conflict(
                "finish or cancel the open profile form first".to_owned(),
            ));
        }
        Ok(())
    }

    fn form(&self) -> AppResult<&ProfileFormController> {
        self.form.as_ref().ok_or_else(no_form_error)
    }

    fn form_mut(&mut self) -> AppResult<&mut ProfileFormController> {
        self.form.as_mut().ok_or_else(no_form_error)
    }
}

fn no_form_error() -> AppError {
    AppError::Conflict("no profile form is open, type 'register' or 'edit'".to_owned())
}
