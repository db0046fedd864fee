use gpui::*;
use gpui_component::Root;
use tracing::{error, info};

use spooky_notes::app::NotesApp;
use spooky_notes::constants::DEFAULT_WINDOW_SIZE;
use spooky_notes::logging;
use spooky_notes::render::NotesView;
use spooky_notes::settings::Settings;

fn main() -> anyhow::Result<()> {
    logging::init();

    let settings = Settings::load();
    info!(?settings, "Starting Spooky Notes");

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let (width, height) = DEFAULT_WINDOW_SIZE;
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Spooky Notes".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|_| NotesView::new(NotesApp::new(settings)));
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(e) = opened {
            error!("Failed to open window: {e}");
            cx.quit();
        }
    });

    Ok(())
}
