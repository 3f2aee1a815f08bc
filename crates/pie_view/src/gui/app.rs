use crate::config;
use crate::events::{AppEvent, cap_total};
use crate::gui::theme;
use gtk::gdk::Key;
use gtk::prelude::*;
use gtk4 as gtk;
use pie_progress::{ColorPair, LayerTree, PieRenderer, ProgressState, Rect};
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

pub struct AppModel {
    pub renderer: Rc<RefCell<PieRenderer<LayerTree>>>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    SetProgress {
        passed: i64,
        total: i64,
        animated: bool,
    },
    Step(i64),
    ResizeTotal(i64),
    SetActiveColors(ColorPair),
    ConfigReload,
    Resize(i32, i32),
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::SetProgress {
                passed,
                total,
                animated,
            } => AppMsg::SetProgress {
                passed,
                total,
                animated,
            },
            AppEvent::Step(delta) => AppMsg::Step(delta),
            AppEvent::SetActiveColors(pair) => AppMsg::SetActiveColors(pair),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
            AppEvent::Quit => AppMsg::Quit,
        }
    }
}

fn key_message(key: Key) -> Option<AppMsg> {
    if key == Key::Escape {
        Some(AppMsg::Quit)
    } else if [Key::plus, Key::equal, Key::KP_Add].contains(&key) {
        Some(AppMsg::Step(1))
    } else if [Key::minus, Key::KP_Subtract].contains(&key) {
        Some(AppMsg::Step(-1))
    } else if key == Key::Up {
        Some(AppMsg::ResizeTotal(1))
    } else if key == Key::Down {
        Some(AppMsg::ResizeTotal(-1))
    } else {
        None
    }
}

// anchored at the origin; the draw func centers it
fn square_in(width: i32, height: i32) -> Rect {
    let side = width.min(height).max(0) as f64;
    Rect::new(0.0, 0.0, side, side)
}

fn requested_progress(current: &ProgressState, msg: &AppMsg) -> Option<(i64, i64, bool)> {
    let (passed, total, animated) = match *msg {
        AppMsg::SetProgress {
            passed,
            total,
            animated,
        } => (passed, total, animated),
        AppMsg::Step(delta) => {
            let next = current.step(delta);
            (next.passed() as i64, next.total() as i64, true)
        }
        AppMsg::ResizeTotal(delta) => {
            let next = current.resize(delta);
            (next.passed() as i64, next.total() as i64, true)
        }
        _ => return None,
    };
    Some((passed, cap_total(total), animated))
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (PieRenderer<LayerTree>, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Pie Progress"),
            set_default_width: 240,
            set_default_height: 240,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    match key_message(key) {
                        Some(msg) => {
                            sender.input(msg);
                            glib::Propagation::Stop
                        }
                        None => glib::Propagation::Proceed,
                    }
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "pie-view-drawing-area",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (renderer, rx) = init;

        theme::load_css();

        let model = AppModel {
            renderer: Rc::new(RefCell::new(renderer)),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let renderer_draw = model.renderer.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                let renderer = renderer_draw.borrow();
                let side = renderer.bounds().width;
                cr.translate(
                    (width as f64 - side) / 2.0,
                    (height as f64 - side) / 2.0,
                );
                if let Err(e) = renderer.surface().paint(cr) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let renderer_tick = model.renderer.clone();
        widgets.drawing_area.add_tick_callback(move |area, _| {
            let mut renderer = renderer_tick.borrow_mut();
            let layers = renderer.surface_mut();
            let was_animating = layers.is_animating();
            layers.advance_to(Instant::now());
            if was_animating {
                area.queue_draw();
            }
            glib::ControlFlow::Continue
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        let mut renderer = self.renderer.borrow_mut();
        renderer.surface_mut().advance_to(Instant::now());

        match msg {
            AppMsg::SetProgress { .. } | AppMsg::Step(_) | AppMsg::ResizeTotal(_) => {
                let request = requested_progress(renderer.state(), &msg);
                if let Some((passed, total, animated)) = request {
                    renderer.update_state(passed, total, animated);
                }
            }
            AppMsg::SetActiveColors(pair) => {
                renderer.update_active_colors(pair);
                let bounds = renderer.bounds();
                renderer.layout(bounds);
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    renderer.update_configuration(new_config);
                    let bounds = renderer.bounds();
                    renderer.layout(bounds);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Resize(width, height) => renderer.layout(square_in(width, height)),
            AppMsg::Quit => relm4::main_application().quit(),
        }

        self.drawing_area.queue_draw();
    }
}
