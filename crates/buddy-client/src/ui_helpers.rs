use secrecy::{ExposeSecret as _, SecretString};

use crate::feedback::{Banner, FeedbackKind};

pub fn get_text_height(ui: &mut egui::Ui) -> f32 {
    egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y)
}

pub fn ui_password_edit(
    ui: &mut egui::Ui,
    password: &mut SecretString,
    hint_text: &str,
    enabled: bool,
) -> egui::Response {
    let mut temp = password.expose_secret().to_owned();
    let result = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut temp)
            .password(true)
            .hint_text(hint_text),
    );
    *password = SecretString::from(temp);
    result
}

pub fn ui_text_edit(
    ui: &mut egui::Ui,
    value: &mut String,
    hint_text: &str,
    enabled: bool,
) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(value).hint_text(hint_text),
    )
}

/// Returns `true` if enter was pressed while the widget had focus
pub fn submitted_with_enter(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

pub fn ui_banner(ui: &mut egui::Ui, banner: &Banner) {
    let Some(feedback) = banner.current() else {
        return;
    };
    let color = match feedback.kind {
        FeedbackKind::Success => egui::Color32::DARK_GREEN,
        FeedbackKind::Warning => ui.visuals().warn_fg_color,
        FeedbackKind::Error => ui.visuals().error_fg_color,
    };
    ui.separator();
    ui.colored_label(color, &feedback.message);
    ui.separator();
}

/// Shows a spinner while `is_busy`
pub fn ui_busy(ui: &mut egui::Ui, is_busy: bool) {
    if is_busy {
        ui.spinner();
    }
}
