use buddy_client_core::{BuddyApi, SessionState, SessionStatus};
use buddy_shared::id::DbId;

use crate::{
    feedback::Banner,
    navigation::{Navigation, Route},
    DataShared,
};

pub mod connections;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;
pub mod transactions;

#[cfg(test)]
pub(crate) mod mock_api;

use connections::ConnectionsPage;
use home::HomePage;
use login::LoginPage;
use profile::ProfilePage;
use signup::SignupPage;
use transactions::TransactionsPage;

/// Shown when nothing more specific is known about a failure
pub const MSG_GENERIC_ERROR: &str = "Une erreur est survenue.";
const MSG_SESSION_LOADING: &str = "Session en cours de chargement, veuillez réessayer";
const MSG_SESSION_FAILED: &str = "Impossible de récupérer l'utilisateur connecté";

/// The controller behind a page
///
/// Each user action validates its input, sends at most one request per step
/// and ends with exactly one of: a navigation, a success banner, or an error
/// banner
pub trait Page {
    /// Called once when the page becomes the current page
    fn on_load<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState);

    /// Advances the requests in flight. Called once per frame
    fn poll<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState);

    fn banner(&self) -> &Banner;

    /// Returns the navigation requested by the page, if any, only once
    fn take_navigation(&mut self) -> Option<Navigation>;

    /// Returns `true` while at least one request is in flight
    fn is_busy(&self) -> bool;
}

#[derive(Debug)]
pub enum UiPage {
    Home(HomePage),
    Login(LoginPage),
    Signup(SignupPage),
    Profile(ProfilePage),
    Connections(ConnectionsPage),
    Transactions(TransactionsPage),
}

impl Default for UiPage {
    fn default() -> Self {
        Self::Home(HomePage::default())
    }
}

macro_rules! do_on_ui_page {
    ($on:ident, $page:ident, $body:tt) => {
        match $on {
            UiPage::Home($page) => $body,
            UiPage::Login($page) => $body,
            UiPage::Signup($page) => $body,
            UiPage::Profile($page) => $body,
            UiPage::Connections($page) => $body,
            UiPage::Transactions($page) => $body,
        }
    };
}

impl UiPage {
    #[tracing::instrument(ret)]
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Home => Self::Home(Default::default()),
            Route::Login => Self::Login(Default::default()),
            Route::Signup => Self::Signup(Default::default()),
            Route::Profile => Self::Profile(Default::default()),
            Route::Connections => Self::Connections(Default::default()),
            Route::Transactions => Self::Transactions(Default::default()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            UiPage::Home(_) => Route::Home,
            UiPage::Login(_) => Route::Login,
            UiPage::Signup(_) => Route::Signup,
            UiPage::Profile(_) => Route::Profile,
            UiPage::Connections(_) => Route::Connections,
            UiPage::Transactions(_) => Route::Transactions,
        }
    }

    pub fn on_load<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        do_on_ui_page!(self, page, { page.on_load(api, session) })
    }

    pub fn poll<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        do_on_ui_page!(self, page, { page.poll(api, session) })
    }

    pub fn take_navigation(&mut self) -> Option<Navigation> {
        do_on_ui_page!(self, page, { page.take_navigation() })
    }

    pub fn is_busy(&self) -> bool {
        do_on_ui_page!(self, page, { page.is_busy() })
    }

    pub fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        do_on_ui_page!(self, page, { page.show(ui, data_shared) })
    }
}

/// Returns the id of the session user, or reports on the banner why it is not
/// available yet
///
/// A failed fetch is reset so the next action tries again
fn session_user_id<A: BuddyApi>(
    api: &A,
    session: &mut SessionState,
    banner: &mut Banner,
) -> Option<DbId> {
    session.request(api);
    match session.poll() {
        SessionStatus::Ready(user) => Some(user.id),
        SessionStatus::NotRequested | SessionStatus::Loading => {
            banner.show_warning(MSG_SESSION_LOADING);
            None
        }
        SessionStatus::Failed(_) => {
            banner.show_error(MSG_SESSION_FAILED);
            session.reset();
            None
        }
    }
}
