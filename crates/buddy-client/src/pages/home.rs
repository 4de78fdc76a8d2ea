use buddy_client_core::{BuddyApi, SessionState};

use super::Page;
use crate::{
    feedback::Banner,
    navigation::{Navigation, Route},
    DataShared,
};

/// Landing page, also where a deleted account ends up
#[derive(Debug, Default)]
pub struct HomePage {
    banner: Banner,
    navigation: Option<Navigation>,
}

impl HomePage {
    pub fn show(&mut self, ui: &mut egui::Ui, _data_shared: &mut DataShared) {
        ui.vertical_centered(|ui| {
            ui.heading("Pay My Buddy");
            ui.label("Envoyez de l'argent à vos proches en quelques clics");
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                for route in [Route::Login, Route::Signup] {
                    if ui.button(route.to_string()).clicked() {
                        self.navigation = Some(Navigation::now(route));
                    }
                }
            });
        });
    }
}

impl Page for HomePage {
    fn on_load<A: BuddyApi>(&mut self, _api: &A, _session: &mut SessionState) {}

    fn poll<A: BuddyApi>(&mut self, _api: &A, _session: &mut SessionState) {}

    fn banner(&self) -> &Banner {
        &self.banner
    }

    fn take_navigation(&mut self) -> Option<Navigation> {
        self.navigation.take()
    }

    fn is_busy(&self) -> bool {
        false
    }
}
