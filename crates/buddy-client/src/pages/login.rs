use buddy_client_core::{AwaitingType, BuddyApi, SessionState};
use buddy_shared::{
    req_args::LoginReqArgs,
    validation::{required_email, required_secret, FIELD_PASSWORD},
};
use secrecy::{ExposeSecret as _, SecretString};
use std::{fmt::Debug, task::Poll};
use tracing::{info, warn};

use super::{Page, MSG_GENERIC_ERROR};
use crate::{
    feedback::Banner,
    navigation::{Navigation, Route},
    ui_helpers::{submitted_with_enter, ui_banner, ui_busy, ui_password_edit, ui_text_edit},
    DataShared,
};

#[derive(Debug)]
pub struct LoginPage {
    email: String,
    password: SecretString,
    banner: Banner,
    login_attempt_status: LoginAttemptStatus,
    navigation: Option<Navigation>,
}

#[derive(Default)]
enum LoginAttemptStatus {
    #[default]
    NotAttempted,
    AwaitingResponse(AwaitingType<()>),
}

impl Debug for LoginAttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAttempted => write!(f, "NotAttempted"),
            Self::AwaitingResponse(_) => write!(f, "AwaitingResponse"),
        }
    }
}

impl Default for LoginPage {
    fn default() -> Self {
        Self {
            email: Default::default(),
            password: SecretString::from(""),
            banner: Default::default(),
            login_attempt_status: Default::default(),
            navigation: Default::default(),
        }
    }
}

impl LoginPage {
    /// Starts with the email of the last login attempt already filled in
    pub fn with_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Default::default()
        }
    }

    pub fn submit<A: BuddyApi>(&mut self, api: &A) {
        if self.is_busy() {
            return;
        }
        let email = match required_email(&self.email).and_then(|email| {
            required_secret(FIELD_PASSWORD, &self.password)?;
            Ok(email)
        }) {
            Ok(email) => email,
            Err(e) => {
                self.banner.show_warning(e.to_string());
                return;
            }
        };

        info!(%email, "sending login attempt");
        let password = SecretString::from(self.password.expose_secret().trim());
        let rx = api.login(LoginReqArgs::new(email, password));
        self.login_attempt_status = LoginAttemptStatus::AwaitingResponse(rx);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.vertical_centered(|ui| {
            ui.heading("Connexion");

            let enabled = !self.is_busy();
            let mut enter_pressed = false;
            let response = ui_text_edit(ui, &mut self.email, "Adresse mail", enabled);
            enter_pressed |= submitted_with_enter(ui, &response);
            let response = ui_password_edit(ui, &mut self.password, "Mot de passe", enabled);
            enter_pressed |= submitted_with_enter(ui, &response);

            ui_banner(ui, &self.banner);
            ui_busy(ui, !enabled);

            let clicked = ui
                .add_enabled(enabled, egui::Button::new("Se connecter"))
                .clicked();
            if clicked || enter_pressed {
                data_shared.last_email = self.email.trim().to_string();
                self.submit(&data_shared.client);
            }

            if ui.link("Pas encore de compte ? Inscription").clicked() {
                self.navigation = Some(Navigation::now(Route::Signup));
            }
        });
    }
}

impl Page for LoginPage {
    fn on_load<A: BuddyApi>(&mut self, _api: &A, _session: &mut SessionState) {}

    fn poll<A: BuddyApi>(&mut self, _api: &A, session: &mut SessionState) {
        let LoginAttemptStatus::AwaitingResponse(rx) = &mut self.login_attempt_status else {
            return;
        };
        let Poll::Ready(result) = rx.try_take() else {
            return;
        };
        self.login_attempt_status = LoginAttemptStatus::NotAttempted;
        match result {
            Ok(()) => {
                info!("login succeeded");
                // A different user may be attached to the session now
                session.reset();
                self.password = SecretString::from("");
                self.navigation = Some(Navigation::now(Route::Profile));
            }
            Err(e) => {
                warn!(?e, "login failed");
                self.banner
                    .show_error(e.server_message().unwrap_or(MSG_GENERIC_ERROR));
            }
        }
    }

    fn banner(&self) -> &Banner {
        &self.banner
    }

    fn take_navigation(&mut self) -> Option<Navigation> {
        self.navigation.take()
    }

    fn is_busy(&self) -> bool {
        matches!(
            self.login_attempt_status,
            LoginAttemptStatus::AwaitingResponse(_)
        )
    }
}
