use buddy_client_core::{Client, SessionState, WakeFn};
use std::sync::Arc;
use strum::IntoEnumIterator as _;
use tracing::{info, instrument, warn};
use web_time::Instant;

use crate::{
    navigation::{Navigation, Route},
    pages::{login::LoginPage, UiPage},
};

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct BuddyApp {
    data_shared: DataShared,
    #[serde(skip)]
    page: UiPage,
    #[serde(skip)]
    is_page_loaded: bool,
    #[serde(skip)]
    pending_navigation: Option<Navigation>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DataShared {
    /// Email used for the last login attempt, offered again on the next one
    pub last_email: String,

    #[serde(skip)]
    pub client: Client,
    #[serde(skip)]
    pub session: SessionState,
}

impl eframe::App for BuddyApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        info!("Saving with key: {}", eframe::APP_KEY);
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per
    /// second. Put your widgets into a `SidePanel`, `TopPanel`,
    /// `CentralPanel`, `Window` or `Area`.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drive_page();
        if let Some(remaining) = self.process_navigation(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
        self.top_panel(ctx);
        self.bottom_panel(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.page.show(ui, &mut self.data_shared);
            });
        });
    }
}

impl BuddyApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, server_address: String) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let mut result: Self = if let Some(storage) = cc.storage {
            info!("Storage found. Loading...");
            match eframe::get_value(storage, eframe::APP_KEY) {
                Some(value) => {
                    info!("Loaded succeeded");
                    value
                }
                None => {
                    warn!("Load failed");
                    Default::default()
                }
            }
        } else {
            info!("No storage found");
            Default::default()
        };

        result.data_shared.client = Client::new(server_address);
        result
            .data_shared
            .client
            .set_ui_notify(wake_fn(cc.egui_ctx.clone()));
        result
    }

    pub fn current_route(&self) -> Route {
        self.page.route()
    }

    /// Loads the page the first time it is shown then advances its requests
    fn drive_page(&mut self) {
        let client = &self.data_shared.client;
        let session = &mut self.data_shared.session;
        if !self.is_page_loaded {
            self.page.on_load(client, session);
            self.is_page_loaded = true;
        }
        self.page.poll(client, session);
        if let Some(navigation) = self.page.take_navigation() {
            info!(?navigation, "navigation requested");
            self.pending_navigation = Some(navigation);
        }
    }

    /// Switches page if a navigation is due. Otherwise returns how long until
    /// the pending one is
    fn process_navigation(&mut self, now: Instant) -> Option<std::time::Duration> {
        let navigation = self.pending_navigation.as_ref()?;
        if navigation.is_due(now) {
            let to = navigation.to;
            self.go_to(to);
            None
        } else {
            Some(navigation.remaining(now))
        }
    }

    #[instrument(skip(self))]
    fn go_to(&mut self, route: Route) {
        self.pending_navigation = None;
        self.is_page_loaded = false;
        self.page = match route {
            Route::Login => UiPage::Login(LoginPage::with_email(&self.data_shared.last_email)),
            _ => UiPage::for_route(route),
        };
    }

    fn top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.separator();
                let current = self.current_route();
                for route in Route::iter() {
                    if ui
                        .selectable_label(current == route, route.to_string())
                        .clicked()
                        && current != route
                    {
                        self.go_to(route);
                    }
                }
            });
        });
    }

    fn bottom_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::BOTTOM), |ui| {
                ui.label(format!(
                    "Serveur : {}",
                    self.data_shared.client.server_address()
                ));
                if let Some(user) = self.data_shared.session.user() {
                    ui.label(format!("Connecté en tant que {}", user.username));
                }
                if self.page.is_busy() {
                    ui.spinner();
                }
                egui::warn_if_debug_build(ui);
            });
        });
    }
}

#[inline]
pub fn wake_fn(ctx: egui::Context) -> WakeFn {
    Arc::new(move || ctx.request_repaint())
}
