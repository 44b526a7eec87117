use std::path::PathBuf;
use std::time::Duration;

use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, center, column, text, text_input};
use iced::{mouse, time, window, Alignment, Element, Subscription, Task, Theme};

mod api;
mod config;
mod pages;
mod route;
mod state;
mod thumbnail;
mod ui;

use config::AppConfig;
use pages::{Effect, IndexPage, PhotographerPage};
use route::Route;
use state::contact::ContactField;
use state::data::{AssetPaths, Database, MediaId};
use state::focus::{KeyPress, NavKey};
use state::likes::LikeSession;
use state::sort::SortKey;

/// Simulated playback advances by this much per tick
const PLAYBACK_TICK: Duration = Duration::from_millis(250);

/// Focusing an id no widget carries takes focus away from every text input
const NO_INPUT: &str = "fisheye.no-input";

/// What the window currently shows
enum Page {
    Loading(Route),
    Index(IndexPage),
    Photographer(Box<PhotographerPage>),
    Failed { route: Route, error: String },
}

/// Main application state
struct FishEye {
    config: AppConfig,
    /// Likes survive navigation between pages
    likes: LikeSession,
    page: Page,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    DataLoaded(Route, Result<Database, String>),
    /// Navigation key from the global keyboard listener
    Key(KeyPress),
    /// Left click that no widget handled
    OutsideClick,
    OpenPhotographer(usize),
    Home,
    SortToggle,
    SortSelect(SortKey),
    OpenMedia(usize),
    ToggleLike(usize),
    LightboxClose,
    LightboxPrev,
    LightboxNext,
    /// Can-play probe answered for the given render generation
    VideoProbed(u64, bool),
    PlaybackTick,
    PlaybackToggle,
    ContactOpen,
    ContactClose,
    ContactInput(ContactField, String),
    ContactSubmit,
    ThumbnailReady(MediaId, Option<PathBuf>),
}

impl FishEye {
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let start = config.start;
        let mut app = FishEye {
            config,
            likes: LikeSession::new(),
            page: Page::Loading(start),
        };
        let task = app.navigate(start);
        (app, task)
    }

    fn assets(&self) -> AssetPaths {
        AssetPaths::new(self.config.assets_dir.clone())
    }

    /// Start loading the data file for `route`
    fn navigate(&mut self, route: Route) -> Task<Message> {
        log::info!("🧭 Navigating to {}", route.href());
        self.page = Page::Loading(route);

        Task::perform(api::load_db(self.config.data.clone()), move |result| {
            Message::DataLoaded(route, result.map_err(|e| e.to_string()))
        })
    }

    /// Mount the page for a finished load
    fn mount(&mut self, route: Route, db: Database) -> Task<Message> {
        match route {
            Route::Index => {
                self.page = Page::Index(IndexPage::new(&db, &self.assets()));
                Task::none()
            }
            Route::Photographer { id } => {
                let mounted = PhotographerPage::mount(
                    &db,
                    id,
                    self.assets(),
                    self.config.cache_dir.clone(),
                    &self.likes,
                );
                match mounted {
                    Some((page, effects)) => {
                        self.page = Page::Photographer(Box::new(page));
                        self.run_effects(effects)
                    }
                    None => {
                        log::error!("❌ No photographer in {}", self.config.data);
                        self.page = Page::Failed {
                            route,
                            error: "No photographer found.".to_string(),
                        };
                        Task::none()
                    }
                }
            }
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let tasks: Vec<_> = effects.into_iter().map(|e| self.run_effect(e)).collect();
        Task::batch(tasks)
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Navigate(route) => self.navigate(route),
            Effect::FocusInput(field) => text_input::focus(text_input::Id::new(field.input_id())),
            Effect::ReleaseInput => text_input::focus(text_input::Id::new(NO_INPUT)),
            Effect::ProbeVideo(probe) => {
                let generation = probe.generation;
                Task::perform(pages::photographer::probe_video(probe.src), move |ready| {
                    Message::VideoProbed(generation, ready)
                })
            }
            Effect::LoadThumbnails(jobs) => Task::batch(jobs.into_iter().map(|job| {
                Task::perform(
                    thumbnail::load_thumbnail(job.source, job.cache_dir, job.media_id),
                    |(media_id, path)| Message::ThumbnailReady(media_id, path),
                )
            })),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::Home => self.navigate(Route::Index),
            Message::DataLoaded(route, result) => {
                // A newer navigation superseded this load
                if !matches!(self.page, Page::Loading(current) if current == route) {
                    return Task::none();
                }
                match result {
                    Ok(db) => self.mount(route, db),
                    Err(error) => {
                        log::error!("❌ Failed to load {}: {}", self.config.data, error);
                        self.page = Page::Failed { route, error };
                        Task::none()
                    }
                }
            }
            Message::Key(press) => {
                let effects = match &mut self.page {
                    Page::Index(page) => page.handle_key(press),
                    Page::Photographer(page) => page.handle_key(press, &mut self.likes),
                    Page::Loading(_) | Page::Failed { .. } => Vec::new(),
                };
                self.run_effects(effects)
            }
            Message::OpenPhotographer(index) => {
                let effects = match &mut self.page {
                    Page::Index(page) => page.activate(index),
                    _ => Vec::new(),
                };
                self.run_effects(effects)
            }
            message => {
                let Page::Photographer(page) = &mut self.page else {
                    return Task::none();
                };
                let effects = match message {
                    Message::OutsideClick => page.outside_click(&self.likes),
                    Message::SortToggle => page.toggle_sort(&self.likes),
                    Message::SortSelect(key) => page.select_sort(key, &self.likes),
                    Message::OpenMedia(index) => page.open_media(index),
                    Message::ToggleLike(index) => page.toggle_like(index, &mut self.likes),
                    Message::LightboxClose => page.close_lightbox(),
                    Message::LightboxPrev => page.prev_media(),
                    Message::LightboxNext => page.next_media(),
                    Message::VideoProbed(generation, ready) => {
                        if ready {
                            page.video_can_play(generation);
                        }
                        Vec::new()
                    }
                    Message::PlaybackTick => {
                        page.playback_tick(PLAYBACK_TICK);
                        Vec::new()
                    }
                    Message::PlaybackToggle => page.toggle_playback(),
                    Message::ContactOpen => page.open_contact(),
                    Message::ContactClose => page.close_contact(),
                    Message::ContactInput(field, value) => {
                        page.contact_input(field, value);
                        Vec::new()
                    }
                    Message::ContactSubmit => page.submit_contact(),
                    Message::ThumbnailReady(media_id, path) => {
                        page.thumbnail_ready(media_id, path);
                        Vec::new()
                    }
                    _ => Vec::new(),
                };
                self.run_effects(effects)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        match &self.page {
            Page::Loading(_) => center(text("Loading…").size(24)).into(),
            Page::Index(page) => ui::index::view(page),
            Page::Photographer(page) => ui::photographer::view(page),
            Page::Failed { route, error } => center(
                column![
                    text(error).size(22).color(ui::style::ERROR),
                    button("Try again").on_press(Message::Navigate(*route)),
                ]
                .spacing(20)
                .align_x(Alignment::Center),
            )
            .into(),
        }
    }

    fn title(&self) -> String {
        match &self.page {
            Page::Photographer(page) => format!("FishEye - {}", page.header().name),
            _ => "FishEye".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        ui::style::theme()
    }

    /// Global keyboard and click listener, plus the playback clock while a
    /// video is running
    fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(on_event);

        let playing = matches!(&self.page, Page::Photographer(page) if page.lightbox().is_playing());
        if playing {
            Subscription::batch([events, time::every(PLAYBACK_TICK).map(|_| Message::PlaybackTick)])
        } else {
            events
        }
    }
}

fn on_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if modifiers.control() || modifiers.alt() || modifiers.logo() {
                return None;
            }
            let nav = nav_key(&key)?;
            // Widgets (text inputs mostly) keep the keys they consume, except
            // the ones that move focus between them
            if status == event::Status::Captured && !matches!(nav, NavKey::Tab | NavKey::Escape) {
                return None;
            }
            Some(Message::Key(KeyPress {
                key: nav,
                shift: modifiers.shift(),
            }))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            if status == event::Status::Ignored =>
        {
            Some(Message::OutsideClick)
        }
        _ => None,
    }
}

fn nav_key(key: &Key) -> Option<NavKey> {
    match key.as_ref() {
        Key::Named(Named::Tab) => Some(NavKey::Tab),
        Key::Named(Named::Enter) => Some(NavKey::Enter),
        Key::Named(Named::Space) => Some(NavKey::Space),
        Key::Named(Named::Escape) => Some(NavKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(NavKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(NavKey::ArrowRight),
        Key::Named(Named::ArrowUp) => Some(NavKey::ArrowUp),
        Key::Named(Named::ArrowDown) => Some(NavKey::ArrowDown),
        Key::Named(Named::Home) => Some(NavKey::Home),
        Key::Named(Named::End) => Some(NavKey::End),
        Key::Character(" ") => Some(NavKey::Space),
        _ => None,
    }
}

/// `RUST_LOG` wins when set; otherwise warnings globally and debug for us
fn init_logger() {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
        return;
    }

    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Warn)
        .filter_module("fisheye", log::LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    init_logger();

    let config = AppConfig::from_environment();
    log::info!("🐟 FishEye starting");
    log::info!("   Data:   {}", config.data);
    log::info!("   Assets: {}", config.assets_dir.display());
    log::info!("   Cache:  {}", config.cache_dir.display());

    iced::application(FishEye::title, FishEye::update, FishEye::view)
        .theme(FishEye::theme)
        .subscription(FishEye::subscription)
        .centered()
        .run_with(move || FishEye::new(config))
}
