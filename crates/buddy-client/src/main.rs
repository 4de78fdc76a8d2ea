#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    let args = buddy_client::cli::Cli::parse();

    if let Err(e) = buddy_client::tracing::init(&args) {
        eprintln!("Failed to start tracing: {e}");
    }

    let rt = match buddy_client::background_worker::create_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start async runtime: {e:?}");
            std::process::exit(1);
        }
    };
    let _enter = rt.enter(); // This Guard must be held to call `tokio::spawn` anywhere in the program
    buddy_client::background_worker::start_background_worker(rt); // This is also needed to prevent the runtime from stopping

    let server_address = args.server_address();
    tracing::info!(%server_address, "starting client");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PayMyBuddy",
        native_options,
        Box::new(move |cc| Ok(Box::new(buddy_client::BuddyApp::new(cc, server_address)))),
    )
}

// When compiling to web using trunk
#[cfg(target_arch = "wasm32")]
fn main() {
    use buddy_shared::const_config::client::CLIENT_DEFAULT_SERVER_ADDRESS;
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(buddy_client::wasm_log_level()).ok();

    let web_options = eframe::WebOptions::default();

    // The backend is expected to serve the app
    let server_address = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| CLIENT_DEFAULT_SERVER_ADDRESS.to_string());

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window found")
            .document()
            .expect("No document found (No DOM)");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(buddy_client::BuddyApp::new(cc, server_address)))),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
