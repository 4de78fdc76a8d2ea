use buddy_shared::id::DbId;
use egui_extras::{Column, TableBuilder};

use super::TransactionsPage;
use crate::{
    pages::Page as _,
    ui_helpers::{get_text_height, ui_banner, ui_busy, ui_text_edit},
    DataShared,
};

impl TransactionsPage {
    pub fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.heading("Transactions");

        ui.horizontal(|ui| {
            self.ui_recipient(ui);
            ui_text_edit(ui, &mut self.description, "Description", true);
            ui_text_edit(ui, &mut self.amount, "0€", true);
            if ui
                .add_enabled(!self.is_submitting(), egui::Button::new("Payer"))
                .clicked()
            {
                self.submit(&data_shared.client, &mut data_shared.session);
            }
            ui_busy(ui, self.is_busy());
        });

        ui_banner(ui, &self.banner);

        ui.separator();
        ui.strong("Mes Transactions");
        if let Some(transaction_id) = self.ui_history(ui) {
            self.delete(&data_shared.client, transaction_id);
        }
    }

    fn ui_recipient(&mut self, ui: &mut egui::Ui) {
        let selected_text = self
            .recipient
            .clone()
            .unwrap_or_else(|| "Sélectionner une relation".to_string());
        egui::ComboBox::from_id_salt("recipient")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for relation in self.relations.iter() {
                    ui.selectable_value(
                        &mut self.recipient,
                        Some(relation.email.clone()),
                        &relation.username,
                    );
                }
            });
    }

    /// Returns the id of the row whose delete button was clicked
    fn ui_history(&self, ui: &mut egui::Ui) -> Option<DbId> {
        let mut result = None;
        let text_height = get_text_height(ui);
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::LEFT))
            .column(Column::auto())
            .column(Column::remainder())
            .column(Column::auto())
            .column(Column::auto())
            .min_scrolled_height(0.0)
            .header(text_height, |mut header| {
                header.col(|ui| {
                    ui.strong("Relations");
                });
                header.col(|ui| {
                    ui.strong("Description");
                });
                header.col(|ui| {
                    ui.strong("Montant");
                });
                header.col(|_ui| {});
            })
            .body(|body| {
                body.rows(text_height, self.history().len(), |mut row| {
                    let transaction = &self.history()[row.index()];
                    row.col(|ui| {
                        ui.label(transaction.connection_name_or_default());
                    });
                    row.col(|ui| {
                        ui.label(transaction.description_or_default());
                    });
                    row.col(|ui| {
                        ui.label(format!("{}€", transaction.amount_display()));
                    });
                    row.col(|ui| {
                        if ui
                            .add_enabled(!self.is_deleting(), egui::Button::new("Supprimer"))
                            .clicked()
                        {
                            result = Some(transaction.id);
                        }
                    });
                });
            });
        result
    }
}
