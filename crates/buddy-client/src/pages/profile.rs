//! The profile of the logged in user, viewed then edited in place with a
//! single button

use buddy_client_core::{AwaitingType, BuddyApi, SessionState};
use buddy_shared::{
    const_config::client::CLIENT_DELETE_REDIRECT_DELAY, models::UserProfile,
    req_args::ProfileUpdateReqArgs, validation::required_email,
};
use secrecy::SecretString;
use std::task::Poll;
use tracing::{info, warn};

use super::Page;
use crate::{
    feedback::Banner,
    navigation::{Navigation, Route},
};

mod frontend;

const MSG_LOAD_FAILED: &str = "Problème à la restitution des données";
const MSG_UPDATE_SUCCESS: &str = "Profil mis à jour avec succès !";
const MSG_UPDATE_FAILED: &str = "Erreur lors de la mise à jour du profil.";
const MSG_DELETE_SUCCESS: &str = "Compte supprimé";
const MSG_DELETE_FAILED: &str = "Suppression du compte a échoué";
pub const MSG_DELETE_CONFIRM: &str =
    "Êtes-vous sûr de vouloir supprimer votre compte ? Cette action est irréversible.";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
    /// The account no longer exists, nothing can be done from here
    Deleted,
}

#[derive(Debug)]
pub struct ProfilePage {
    username: String,
    email: String,
    password: SecretString,
    edit_mode: EditMode,
    is_confirming_delete: bool,
    profile_request: Option<AwaitingType<UserProfile>>,
    save_request: Option<AwaitingType<()>>,
    delete_request: Option<AwaitingType<()>>,
    banner: Banner,
    navigation: Option<Navigation>,
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self {
            username: Default::default(),
            email: Default::default(),
            password: SecretString::from(""),
            edit_mode: Default::default(),
            is_confirming_delete: Default::default(),
            profile_request: Default::default(),
            save_request: Default::default(),
            delete_request: Default::default(),
            banner: Default::default(),
            navigation: Default::default(),
        }
    }
}

impl ProfilePage {
    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.edit_mode {
            EditMode::Editing => "Enregistrer",
            EditMode::Viewing | EditMode::Deleted => "Modifier",
        }
    }

    pub fn are_fields_enabled(&self) -> bool {
        self.edit_mode == EditMode::Editing && !self.is_busy()
    }

    /// Switches to editing, or saves when already editing
    pub fn toggle<A: BuddyApi>(&mut self, api: &A) {
        if self.is_busy() {
            return;
        }
        match self.edit_mode {
            EditMode::Viewing => {
                self.edit_mode = EditMode::Editing;
            }
            EditMode::Editing => self.save(api),
            EditMode::Deleted => {}
        }
    }

    fn save<A: BuddyApi>(&mut self, api: &A) {
        let email = match required_email(&self.email) {
            Ok(email) => email,
            Err(e) => {
                self.banner.show_warning(e.to_string());
                return;
            }
        };
        let args = ProfileUpdateReqArgs::new(email, &self.password);
        info!(?args, "saving profile");
        self.save_request = Some(api.update_profile(args));
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.is_confirming_delete
    }

    pub fn request_delete(&mut self) {
        if self.edit_mode != EditMode::Deleted && !self.is_busy() {
            self.is_confirming_delete = true;
        }
    }

    pub fn confirm_delete<A: BuddyApi>(&mut self, api: &A, is_confirmed: bool) {
        if !self.is_confirming_delete {
            return;
        }
        self.is_confirming_delete = false;
        if is_confirmed {
            info!("deleting account");
            self.delete_request = Some(api.delete_profile());
        } else {
            info!("account deletion canceled");
        }
    }

    fn poll_profile(&mut self) {
        let Some(rx) = self.profile_request.as_mut() else {
            return;
        };
        let Poll::Ready(result) = rx.try_take() else {
            return;
        };
        self.profile_request = None;
        match result {
            Ok(profile) => {
                self.username = profile.username;
                self.email = profile.email;
            }
            Err(e) => {
                warn!(?e, "failed to load profile");
                self.banner.show_error(MSG_LOAD_FAILED);
            }
        }
    }

    fn poll_save(&mut self) {
        let Some(rx) = self.save_request.as_mut() else {
            return;
        };
        let Poll::Ready(result) = rx.try_take() else {
            return;
        };
        self.save_request = None;
        match result {
            Ok(()) => {
                info!("profile saved");
                self.password = SecretString::from("");
                self.edit_mode = EditMode::Viewing;
                self.banner.show_success(MSG_UPDATE_SUCCESS);
            }
            Err(e) => {
                warn!(?e, "failed to save profile");
                self.banner.show_error(MSG_UPDATE_FAILED);
            }
        }
    }

    fn poll_delete(&mut self, session: &mut SessionState) {
        let Some(rx) = self.delete_request.as_mut() else {
            return;
        };
        let Poll::Ready(result) = rx.try_take() else {
            return;
        };
        self.delete_request = None;
        match result {
            Ok(()) => {
                info!("account deleted");
                self.edit_mode = EditMode::Deleted;
                session.reset();
                self.banner.show_success(MSG_DELETE_SUCCESS);
                self.navigation = Some(Navigation::after(
                    Route::Home,
                    CLIENT_DELETE_REDIRECT_DELAY,
                ));
            }
            Err(e) => {
                warn!(?e, "failed to delete account");
                self.banner.show_error(MSG_DELETE_FAILED);
            }
        }
    }
}

impl Page for ProfilePage {
    fn on_load<A: BuddyApi>(&mut self, api: &A, _session: &mut SessionState) {
        self.profile_request = Some(api.get_profile());
    }

    fn poll<A: BuddyApi>(&mut self, _api: &A, session: &mut SessionState) {
        self.poll_profile();
        self.poll_save();
        self.poll_delete(session);
    }

    fn banner(&self) -> &Banner {
        &self.banner
    }

    fn take_navigation(&mut self) -> Option<Navigation> {
        self.navigation.take()
    }

    fn is_busy(&self) -> bool {
        self.profile_request.is_some()
            || self.save_request.is_some()
            || self.delete_request.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        feedback::FeedbackKind,
        pages::mock_api::{http_error, loaded_session, settle, Call, MockApi},
    };
    use buddy_client_core::SessionStatus;
    use secrecy::ExposeSecret as _;

    fn profile() -> UserProfile {
        UserProfile {
            username: "bob".into(),
            email: "bob@mail.com".into(),
        }
    }

    /// A page with the profile loaded
    fn loaded_page(api: &MockApi, session: &mut SessionState) -> ProfilePage {
        api.get_profile.push(Ok(profile()));
        let mut result = ProfilePage::default();
        result.on_load(api, session);
        settle(&mut result, api, session);
        api.clear_calls();
        result
    }

    #[test]
    fn load_fills_fields() {
        let api = MockApi::default();
        let mut session = SessionState::default();

        let page = loaded_page(&api, &mut session);

        assert_eq!(page.username, "bob");
        assert_eq!(page.email, "bob@mail.com");
        assert_eq!(page.edit_mode(), EditMode::Viewing);
        assert_eq!(page.toggle_label(), "Modifier");
        assert!(!page.are_fields_enabled());
        assert!(page.banner().current().is_none());
    }

    #[test]
    fn load_failure_shows_error() {
        let api = MockApi::default();
        api.get_profile.push(Err(http_error(401, "")));
        let mut session = SessionState::default();
        let mut page = ProfilePage::default();

        page.on_load(&api, &mut session);
        settle(&mut page, &api, &mut session);

        assert_eq!(page.banner().kind(), Some(FeedbackKind::Error));
        assert_eq!(page.banner().message(), Some(MSG_LOAD_FAILED));
    }

    #[test]
    fn first_toggle_only_enables_editing() {
        let api = MockApi::default();
        let mut session = SessionState::default();
        let mut page = loaded_page(&api, &mut session);

        page.toggle(&api);

        assert!(api.calls().is_empty());
        assert_eq!(page.edit_mode(), EditMode::Editing);
        assert_eq!(page.toggle_label(), "Enregistrer");
        assert!(page.are_fields_enabled());
    }

    #[test]
    fn save_success_returns_to_viewing() {
        let api = MockApi::default();
        api.update_profile.push(Ok(()));
        let mut session = SessionState::default();
        let mut page = loaded_page(&api, &mut session);
        page.toggle(&api);
        page.email = "new@mail.com".into();
        page.password = SecretString::from("new-pass");

        page.toggle(&api);
        settle(&mut page, &api, &mut session);

        assert_eq!(
            api.calls(),
            vec![Call::UpdateProfile {
                email: "new@mail.com".into(),
                password: Some("new-pass".into())
            }]
        );
        assert_eq!(page.edit_mode(), EditMode::Viewing);
        assert_eq!(page.banner().kind(), Some(FeedbackKind::Success));
        assert_eq!(page.banner().message(), Some(MSG_UPDATE_SUCCESS));
        assert!(page.password.expose_secret().is_empty());
    }

    #[test]
    fn blank_password_is_sent_as_none() {
        let api = MockApi::default();
        api.update_profile.push(Ok(()));
        let mut session = SessionState::default();
        let mut page = loaded_page(&api, &mut session);
        page.toggle(&api);
        page.password = SecretString::from("   ");

        page.toggle(&api);

        assert_eq!(
            api.calls(),
            vec![Call::UpdateProfile {
                email: "bob@mail.com".into(),
                password: None
            }]
        );
    }

    #[test]
    fn save_failure_stays_editing() {
        let api = MockApi::default();
        api.update_profile.push(Err(http_error(500, "boom")));
        let mut session = SessionState::default();
        let mut page = loaded_page(&api, &mut session);
        page.toggle(&api);

        page.toggle(&api);
        settle(&mut page, &api, &mut session);

        assert_eq!(page.edit_mode(), EditMode::Editing);
        assert_eq!(page.banner().kind(), Some(FeedbackKind::Error));
        assert_eq!(page.banner().message(), Some(MSG_UPDATE_FAILED));
    }

    #[test]
    fn empty_email_warns_and_stays_editing() {
        let api = MockApi::default();
        let mut session = SessionState::default();
        let mut page = loaded_page(&api, &mut session);
        page.toggle(&api);
        page.email = " ".into();

        page.toggle(&api);

        assert!(api.calls().is_empty());
        assert_eq!(page.edit_mode(), EditMode::Editing);
        assert_eq!(page.banner().kind(), Some(FeedbackKind::Warning));
    }

    #[test]
    fn toggle_ignored_while_saving() {
        let api = MockApi::default();
        let mut session = SessionState::default();
        let mut page = loaded_page(&api, &mut session);
        page.toggle(&api);
        page.toggle(&api);

        page.toggle(&api);
        page.poll(&api, &mut session);

        assert_eq!(api.calls().len(), 1);
        assert!(!page.are_fields_enabled());
        assert_eq!(page.edit_mode(), EditMode::Editing);

        api.update_profile.resolve(Ok(()));
        page.poll(&api, &mut session);

        assert_eq!(page.edit_mode(), EditMode::Viewing);
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let api = MockApi::default();
        let mut session = SessionState::default();
        let mut page = loaded_page(&api, &mut session);

        page.request_delete();
        assert!(page.is_confirming_delete());
        page.confirm_delete(&api, false);

        assert!(!page.is_confirming_delete());
        assert!(api.calls().is_empty());
        assert!(page.banner().current().is_none());
    }

    #[test]
    fn delete_success_clears_session_and_goes_home() {
        let api = MockApi::default();
        let mut session = loaded_session(&api);
        let mut page = loaded_page(&api, &mut session);
        api.delete_profile.push(Ok(()));

        page.request_delete();
        page.confirm_delete(&api, true);
        settle(&mut page, &api, &mut session);

        assert_eq!(api.calls(), vec![Call::DeleteProfile]);
        assert_eq!(page.edit_mode(), EditMode::Deleted);
        assert_eq!(page.banner().message(), Some(MSG_DELETE_SUCCESS));
        assert_eq!(session.status(), SessionStatus::NotRequested);
        let navigation = page.take_navigation().unwrap();
        assert_eq!(navigation.to, Route::Home);
        assert_eq!(navigation.delay, CLIENT_DELETE_REDIRECT_DELAY);

        page.toggle(&api);
        page.request_delete();
        assert_eq!(page.edit_mode(), EditMode::Deleted);
        assert!(!page.is_confirming_delete());
    }

    #[test]
    fn delete_failure_stays_on_page() {
        let api = MockApi::default();
        let mut session = loaded_session(&api);
        let mut page = loaded_page(&api, &mut session);
        api.delete_profile.push(Err(http_error(500, "")));

        page.request_delete();
        page.confirm_delete(&api, true);
        settle(&mut page, &api, &mut session);

        assert_eq!(page.banner().kind(), Some(FeedbackKind::Error));
        assert_eq!(page.banner().message(), Some(MSG_DELETE_FAILED));
        assert_eq!(page.edit_mode(), EditMode::Viewing);
        assert!(page.take_navigation().is_none());
        assert!(session.user().is_some());
    }
}
