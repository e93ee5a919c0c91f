use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::theme;
use crate::gui::view::WheelView;
use gtk::prelude::*;
use gtk4 as gtk;
use radial::{Label, SelectCallback, Spinner, WheelMount};
use rand::rngs::StdRng;
use relm4::prelude::*;
use std::rc::Rc;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(16);
const PROMPT: &str = "Spin the wheel or pick a slice";

pub struct AppModel {
    config: Config,
    mount: WheelMount,
    view: WheelView,
    spinner: Spinner,
    rng: StdRng,
    ticker: Option<glib::SourceId>,
    last_tick: Instant,
    result: String,
}

#[derive(Debug)]
pub enum AppMsg {
    Spin,
    Tick,
    Selected(usize, Label),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Spin => AppMsg::Spin,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
            AppEvent::Quit => AppMsg::Quit,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Career Wheel"),
            set_resizable: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gdk4::Key::Escape {
                        sender.input(AppMsg::Quit);
                        glib::Propagation::Stop
                    } else if key == gdk4::Key::space {
                        sender.input(AppMsg::Spin);
                        glib::Propagation::Stop
                    } else {
                        glib::Propagation::Proceed
                    }
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 16,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_halign: gtk::Align::Center,
                    set_valign: gtk::Align::Center,
                    add_css_class: "careerwheel-drawing-area",
                },

                gtk::Label {
                    add_css_class: "careerwheel-result",
                    #[watch]
                    set_label: &model.result,
                },

                gtk::Button {
                    set_label: "Spin",
                    set_halign: gtk::Align::Center,
                    #[watch]
                    set_sensitive: !model.spinner.is_running(),
                    connect_clicked => AppMsg::Spin,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();

        let model = AppModel {
            spinner: config.spin.spinner(config.wheel.slice_count()),
            rng: config.spin.rng(),
            config,
            mount: WheelMount::new(),
            view: WheelView::new(gtk::DrawingArea::default()),
            ticker: None,
            last_tick: Instant::now(),
            result: PROMPT.to_string(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.view = WheelView::new(widgets.drawing_area.clone());
        model.mount_wheel(&sender);

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Spin => self.start_spin(&sender),
            AppMsg::Tick => self.advance_spin(),
            AppMsg::Selected(index, label) => {
                log::info!("Selected slice {}: {}", index, label);
                self.result = if label.is_empty() {
                    format!("Slice {}", index + 1)
                } else {
                    label.to_string()
                };
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.config = new_config;
                    self.mount_wheel(&sender);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => {
                self.stop_ticker();
                self.mount.teardown();
                self.view.detach();
                relm4::main_application().quit();
            }
        }
    }
}

impl AppModel {
    /// Rebuilds the wheel from the current config. Any spin in flight is
    /// abandoned since its target may no longer exist.
    fn mount_wheel(&mut self, sender: &ComponentSender<Self>) {
        self.stop_ticker();

        let input = sender.input_sender().clone();
        let on_select: SelectCallback = Rc::new(move |index, label: &Label| {
            input.emit(AppMsg::Selected(index, label.clone()));
        });
        let binding = self
            .mount
            .configure(self.config.wheel.clone(), Some(on_select));

        self.spinner = self.config.spin.spinner(binding.wheel().slice_count());
        self.rng = self.config.spin.rng();
        self.result = PROMPT.to_string();
        self.view.attach(binding);
    }

    fn start_spin(&mut self, sender: &ComponentSender<Self>) {
        if self.spinner.is_running() {
            return;
        }
        let target = self.spinner.start(&mut self.rng);
        log::debug!("Spinning towards slice {}", target);
        if let Some(binding) = self.mount.binding() {
            binding.lock();
        }
        self.result = "Spinning...".to_string();
        self.last_tick = Instant::now();

        let input = sender.input_sender().clone();
        self.ticker = Some(glib::timeout_add_local(TICK, move || {
            input.emit(AppMsg::Tick);
            glib::ControlFlow::Continue
        }));
    }

    fn advance_spin(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        let landed = self.spinner.tick(elapsed);
        self.view.set_highlight(self.spinner.highlighted());

        if let Some(index) = landed {
            self.stop_ticker();
            if let Some(binding) = self.mount.binding() {
                binding.unlock();
                binding.select(index);
            }
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(source) = self.ticker.take() {
            source.remove();
        }
    }
}
