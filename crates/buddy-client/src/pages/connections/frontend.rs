use egui_extras::{Column, TableBuilder};

use super::ConnectionsPage;
use crate::{
    pages::Page as _,
    ui_helpers::{get_text_height, submitted_with_enter, ui_banner, ui_busy, ui_text_edit},
    DataShared,
};

impl ConnectionsPage {
    pub fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.heading("Relations");

        ui.horizontal(|ui| {
            let response = ui_text_edit(ui, &mut self.email, "Adresse mail", true);
            let enter_pressed = submitted_with_enter(ui, &response);
            if ui.button("Rechercher").clicked() || enter_pressed {
                self.search(&data_shared.client, &mut data_shared.session);
            }
            if ui.button("Ajouter").clicked() {
                self.add(&data_shared.client, &mut data_shared.session);
            }
            ui_busy(ui, self.is_busy());
        });
        ui.label("Laisser vide pour afficher toutes vos relations");

        ui_banner(ui, &self.banner);

        if self.is_table_visible() {
            self.ui_table(ui);
        }
    }

    fn ui_table(&self, ui: &mut egui::Ui) {
        let text_height = get_text_height(ui);
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::LEFT))
            .column(Column::auto())
            .column(Column::remainder())
            .min_scrolled_height(0.0)
            .header(text_height, |mut header| {
                header.col(|ui| {
                    ui.strong("Nom");
                });
                header.col(|ui| {
                    ui.strong("Adresse mail");
                });
            })
            .body(|body| {
                body.rows(text_height, self.rows().len(), |mut row| {
                    let connection = &self.rows()[row.index()];
                    row.col(|ui| {
                        ui.label(&connection.username);
                    });
                    row.col(|ui| {
                        ui.label(&connection.email);
                    });
                });
            });
    }
}
