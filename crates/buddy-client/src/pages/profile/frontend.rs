use super::{EditMode, ProfilePage, MSG_DELETE_CONFIRM};
use crate::{
    pages::Page as _,
    ui_helpers::{ui_banner, ui_busy, ui_password_edit, ui_text_edit},
    DataShared,
};

impl ProfilePage {
    pub fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.vertical_centered(|ui| {
            ui.heading("Profil");

            ui.label(&self.username);
            let enabled = self.are_fields_enabled();
            ui_text_edit(ui, &mut self.email, "Adresse mail", enabled);
            ui_password_edit(ui, &mut self.password, "Nouveau mot de passe", enabled);

            ui_banner(ui, &self.banner);
            ui_busy(ui, self.is_busy());

            let is_deleted = self.edit_mode() == EditMode::Deleted;
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(
                        !is_deleted && !self.is_busy(),
                        egui::Button::new(self.toggle_label()),
                    )
                    .clicked()
                {
                    self.toggle(&data_shared.client);
                }
                if ui
                    .add_enabled(
                        !is_deleted && !self.is_busy(),
                        egui::Button::new("Supprimer le compte"),
                    )
                    .clicked()
                {
                    self.request_delete();
                }
            });
        });

        if self.is_confirming_delete() {
            self.ui_confirm_delete(ui.ctx(), data_shared);
        }
    }

    fn ui_confirm_delete(&mut self, ctx: &egui::Context, data_shared: &mut DataShared) {
        let mut answer = None;
        egui::Window::new("Suppression du compte")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(MSG_DELETE_CONFIRM);
                ui.horizontal(|ui| {
                    if ui.button("Confirmer").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Annuler").clicked() {
                        answer = Some(false);
                    }
                });
            });
        if let Some(is_confirmed) = answer {
            self.confirm_delete(&data_shared.client, is_confirmed);
        }
    }
}
