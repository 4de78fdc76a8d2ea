use buddy_client_core::{AwaitingType, BuddyApi, SessionState};
use buddy_shared::{
    const_config::client::CLIENT_SIGNUP_REDIRECT_DELAY,
    req_args::SignupReqArgs,
    validation::{required, required_email, required_secret, FIELD_PASSWORD, FIELD_USERNAME},
};
use secrecy::SecretString;
use std::task::Poll;
use tracing::{info, warn};

use super::{Page, MSG_GENERIC_ERROR};
use crate::{
    feedback::Banner,
    navigation::{Navigation, Route},
    ui_helpers::{ui_banner, ui_busy, ui_password_edit, ui_text_edit},
    DataShared,
};

const MSG_SIGNUP_SUCCESS: &str = "Compte utilisateur créé avec succès ! Redirection en cours...";

#[derive(Debug)]
pub struct SignupPage {
    username: String,
    email: String,
    password: SecretString,
    banner: Banner,
    awaiting: Option<AwaitingType<()>>,
    is_created: bool,
    navigation: Option<Navigation>,
}

impl Default for SignupPage {
    fn default() -> Self {
        Self {
            username: Default::default(),
            email: Default::default(),
            password: SecretString::from(""),
            banner: Default::default(),
            awaiting: Default::default(),
            is_created: Default::default(),
            navigation: Default::default(),
        }
    }
}

impl SignupPage {
    pub fn submit<A: BuddyApi>(&mut self, api: &A) {
        if self.is_busy() || self.is_created {
            return;
        }
        let args = match self.validated_args() {
            Ok(args) => args,
            Err(e) => {
                self.banner.show_warning(e.to_string());
                return;
            }
        };
        info!(?args, "sending signup");
        self.awaiting = Some(api.signup(args));
    }

    fn validated_args(&self) -> Result<SignupReqArgs, buddy_shared::errors::ValidationError> {
        let username = required(FIELD_USERNAME, &self.username)?;
        let email = required_email(&self.email)?;
        required_secret(FIELD_PASSWORD, &self.password)?;
        Ok(SignupReqArgs::new(username, email, self.password.clone()))
    }

    pub fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.vertical_centered(|ui| {
            ui.heading("Inscription");

            let enabled = !self.is_busy() && !self.is_created;
            ui_text_edit(ui, &mut self.username, "Nom d'utilisateur", enabled);
            ui_text_edit(ui, &mut self.email, "Adresse mail", enabled);
            ui_password_edit(ui, &mut self.password, "Mot de passe", enabled);

            ui_banner(ui, &self.banner);
            ui_busy(ui, self.is_busy());

            if ui
                .add_enabled(enabled, egui::Button::new("S'inscrire"))
                .clicked()
            {
                self.submit(&data_shared.client);
            }
        });
    }
}

impl Page for SignupPage {
    fn on_load<A: BuddyApi>(&mut self, _api: &A, _session: &mut SessionState) {}

    fn poll<A: BuddyApi>(&mut self, _api: &A, _session: &mut SessionState) {
        let Some(rx) = self.awaiting.as_mut() else {
            return;
        };
        let Poll::Ready(result) = rx.try_take() else {
            return;
        };
        self.awaiting = None;
        match result {
            Ok(()) => {
                info!("account created");
                self.is_created = true;
                self.banner.show_success(MSG_SIGNUP_SUCCESS);
                self.navigation = Some(Navigation::after(
                    Route::Login,
                    CLIENT_SIGNUP_REDIRECT_DELAY,
                ));
            }
            Err(e) => {
                warn!(?e, "signup failed");
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
        self.awaiting.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        feedback::FeedbackKind,
        pages::mock_api::{http_error, settle, Call, MockApi},
    };
    use buddy_client_core::ClientError;
    use rstest::rstest;

    fn filled_page(username: &str, email: &str, password: &str) -> SignupPage {
        SignupPage {
            username: username.into(),
            email: email.into(),
            password: SecretString::from(password),
            ..Default::default()
        }
    }

    #[rstest]
    #[case::no_username("", "bob@mail.com", "pw", "Veuillez renseigner le champ « nom d'utilisateur »")]
    #[case::no_email("bob", " ", "pw", "Veuillez renseigner le champ « adresse mail »")]
    #[case::no_password("bob", "bob@mail.com", "", "Veuillez renseigner le champ « mot de passe »")]
    fn missing_field_warns_without_request(
        #[case] username: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: &str,
    ) {
        let api = MockApi::default();
        let mut page = filled_page(username, email, password);

        page.submit(&api);

        assert!(api.calls().is_empty());
        assert_eq!(page.banner().kind(), Some(FeedbackKind::Warning));
        assert_eq!(page.banner().message(), Some(expected));
    }

    #[test]
    fn success_redirects_to_login_after_delay() {
        let api = MockApi::default();
        api.signup.push(Ok(()));
        let mut session = SessionState::default();
        let mut page = filled_page(" bob ", "bob@mail.com", " pw ");

        page.submit(&api);
        settle(&mut page, &api, &mut session);

        assert_eq!(
            api.calls(),
            vec![Call::Signup {
                username: "bob".into(),
                email: "bob@mail.com".into(),
                password: " pw ".into(),
            }]
        );
        assert_eq!(page.banner().kind(), Some(FeedbackKind::Success));
        assert_eq!(page.banner().message(), Some(MSG_SIGNUP_SUCCESS));
        assert_eq!(page.banner().shown_count(), 1);
        let navigation = page.take_navigation().unwrap();
        assert_eq!(navigation.to, Route::Login);
        assert_eq!(navigation.delay, CLIENT_SIGNUP_REDIRECT_DELAY);
    }

    #[test]
    fn no_second_account_after_success() {
        let api = MockApi::default();
        api.signup.push(Ok(()));
        let mut session = SessionState::default();
        let mut page = filled_page("bob", "bob@mail.com", "pw");

        page.submit(&api);
        settle(&mut page, &api, &mut session);
        page.submit(&api);

        assert_eq!(api.calls().len(), 1);
    }

    #[rstest]
    #[case::server_message(http_error(409, "Email déjà utilisé"), "Email déjà utilisé")]
    #[case::no_server_message(http_error(500, ""), MSG_GENERIC_ERROR)]
    #[case::parse(ClientError::Parse("bad".into()), MSG_GENERIC_ERROR)]
    fn failure_shows_error(#[case] error: ClientError, #[case] expected: &str) {
        let api = MockApi::default();
        api.signup.push(Err(error));
        let mut session = SessionState::default();
        let mut page = filled_page("bob", "bob@mail.com", "pw");

        page.submit(&api);
        settle(&mut page, &api, &mut session);

        assert_eq!(page.banner().kind(), Some(FeedbackKind::Error));
        assert_eq!(page.banner().message(), Some(expected));
        assert!(page.take_navigation().is_none());
    }
}
