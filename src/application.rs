use gpui::{AppContext, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::ContactFormConfig;
use crate::contact::ContactForm;
use crate::window::ContactFormWindow;

const DEFAULT_LOG_FILTER: &str = "contact_form=info";

type LaunchHook = Box<dyn FnOnce(&mut gpui::App, &ContactFormConfig) + 'static>;

pub struct ContactFormApplication {
    application: gpui::Application,
    config: ContactFormConfig,
    launch_hooks: Vec<LaunchHook>,
}

impl Default for ContactFormApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormApplication {
    pub fn new() -> Self {
        Self::from_application(gpui::Application::new())
    }

    pub fn headless() -> Self {
        Self::from_application(gpui::Application::headless())
    }

    pub fn from_application(application: gpui::Application) -> Self {
        Self {
            application,
            config: ContactFormConfig::default(),
            launch_hooks: Vec::new(),
        }
    }

    pub fn config(&self) -> &ContactFormConfig {
        &self.config
    }

    pub fn with_config(mut self, config: ContactFormConfig) -> Self {
        self.config = config;
        self
    }

    pub fn before_launch(
        mut self,
        hook: impl FnOnce(&mut gpui::App, &ContactFormConfig) + 'static,
    ) -> Self {
        self.launch_hooks.push(Box::new(hook));
        self
    }

    /// Installs logging, opens the form window and runs the event loop.
    pub fn run(self) {
        init_logging();

        let config = self.config;
        let launch_hooks = self.launch_hooks;
        self.application.run(move |cx| {
            for hook in launch_hooks {
                hook(cx, &config);
            }

            let form = match ContactForm::new() {
                Ok(form) => form,
                Err(err) => {
                    error!(%err, "failed to build contact form");
                    cx.quit();
                    return;
                }
            };

            let bounds = Bounds::centered(None, size(px(config.width), px(config.height)), cx);
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(config.title.clone()),
                    ..Default::default()
                }),
                ..Default::default()
            };
            match cx.open_window(options, |_window, cx| {
                cx.new(|cx| ContactFormWindow::new(form, cx))
            }) {
                Ok(_) => info!(title = %config.title, "contact form window opened"),
                Err(err) => {
                    error!(%err, "failed to open contact form window");
                    cx.quit();
                    return;
                }
            }
            cx.activate(true);
        });
    }
}

/// Routes `tracing` output to stderr, filtered by `RUST_LOG`. A subscriber
/// installed earlier wins.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}
