//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::dispatcher::{Gesture, GestureSender};
use crate::modal::FormFields;

/// Gesture entry point handed to every component
#[derive(Clone)]
pub struct AppContext {
    gestures: GestureSender,
}

impl AppContext {
    pub fn new(gestures: GestureSender) -> Self {
        Self { gestures }
    }

    pub fn create(&self) {
        self.gestures.send(Gesture::CreateClick);
    }

    pub fn refresh(&self) {
        self.gestures.send(Gesture::RefreshClick);
    }

    pub fn export(&self) {
        self.gestures.send(Gesture::ExportClick);
    }

    pub fn edit(&self, id: String) {
        self.gestures.send(Gesture::EditClick { id });
    }

    pub fn delete(&self, id: String) {
        self.gestures.send(Gesture::DeleteClick { id });
    }

    pub fn submit(&self, form: FormFields) {
        self.gestures.send(Gesture::SubmitClick(form));
    }

    pub fn close(&self) {
        self.gestures.send(Gesture::CloseClick);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
