mod battery;
mod config;
mod icon;
mod types;
mod ui;

use anyhow::Result;
use gtk4::prelude::*;
use gtk4::{glib, Application};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, load_css, Config};
use crate::icon::{IconComposer, PixbufBackend, RenderCache};
use crate::ui::OSDWindow;

fn update(config: &Config, cache: &mut RenderCache<PixbufBackend>, osd: &OSDWindow) {
    match battery::read_status(&config.battery_path) {
        Ok(status) => {
            osd.show_status(cache.request(status), &status.to_string());
            debug!(%status, renders = cache.renders(), "battery status");
        }
        Err(fault) => {
            debug!(?fault, "battery fault");
            // Whatever battery comes back is rendered from scratch.
            cache.invalidate();
            let icon = cache.composer().compose_fault(Some(fault));
            osd.show_fault(icon.as_ref(), &fault.to_string());
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config();
    info!(
        battery = %config.battery_path,
        resources = %config.resource_dir.display(),
        policy = ?config.invalidation,
        "starting"
    );

    let app = Application::builder()
        .application_id("com.github.battery-icon")
        .build();

    app.connect_startup(|_| {
        load_css();
    });

    app.connect_activate(move |app| {
        let config = config.clone();
        let osd = OSDWindow::new(app, &config);
        let backend = PixbufBackend::new(config.resource_dir.clone(), config.icon_scale);
        if let Err(e) = backend.verify_artwork() {
            warn!(
                "{}; battery icons will be missing until {} holds artwork an installed gdk-pixbuf loader can read",
                e,
                config.resource_dir.display()
            );
        }
        let mut cache = RenderCache::new(IconComposer::new(backend), config.invalidation);

        update(&config, &mut cache, &osd);

        let poll_interval = u32::try_from(config.poll_interval_secs).unwrap_or(u32::MAX);
        glib::timeout_add_seconds_local(poll_interval, move || {
            update(&config, &mut cache, &osd);
            glib::ControlFlow::Continue
        });
    });

    app.run_with_args(&Vec::<String>::new());
    Ok(())
}
