// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dashboard parts.
//!
//! The `App` struct owns every state container (preferences, notification
//! center, connectivity monitor, screens) and translates messages into side
//! effects like health-check probes or volume fetches. There is no global
//! state: everything a component needs is handed to it from here.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{self, ApiClient, LiveChannel};
use crate::compat::ClientKind;
use crate::config::{self, Config};
use crate::connectivity::{probe, Monitor, ProbeTicket};
use crate::i18n::{self, I18n};
use crate::preferences::{
    detect_system_dark, Language, LanguagePreference, SidebarPreference, ThemePreference,
};
use crate::storage::Storage;
use crate::ui::notifications::{self, Notification};
use crate::ui::sidebar::HoverCard;
use crate::ui::volumes;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    screen: Screen,
    config: Config,
    storage: Storage,
    client: ApiClient,
    theme: ThemePreference,
    language: LanguagePreference,
    sidebar: SidebarPreference,
    hover_card: HoverCard,
    notifications: notifications::Manager,
    monitor: Monitor,
    volumes: volumes::State,
    live: LiveChannel,
    /// Classification of this client, once the backend told us its agent.
    client_kind: Option<ClientKind>,
    /// Time of the last tick, for animations rendered in `view`.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("status", &self.monitor.status())
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced calls boot through `Fn`, so each call gets its own copy of the flags.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and preferences, then starts the first probe,
    /// the volume listing and the user-agent lookup.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(url) = flags.backend_url {
            config.backend.base_url = url;
        }
        let first_run_language = i18n::resolve_language(flags.lang.as_deref(), &config);
        let now = Instant::now();

        let mut app = Self::from_parts(
            config,
            Storage::open_default(),
            first_run_language,
            detect_system_dark(),
            now,
        );

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key), now);
        }

        let task = app.startup(now);
        (app, task)
    }

    /// Builds the state from already loaded parts, without touching the
    /// filesystem, the OS theme or the network.
    pub fn from_parts(
        config: Config,
        storage: Storage,
        first_run_language: Language,
        system_is_dark: bool,
        now: Instant,
    ) -> Self {
        let theme = ThemePreference::load(&storage, system_is_dark);
        let language = LanguagePreference::load_or(&storage, first_run_language);
        let sidebar = SidebarPreference::load(&storage);

        tracing::info!(
            backend = %config.backend.base_url,
            language = ?language.current(),
            theme = ?theme.mode(),
            "dashboard starting"
        );

        Self {
            i18n: I18n::new(language.current()),
            screen: Screen::default(),
            client: ApiClient::new(&config.backend),
            live: LiveChannel::new(&config.backend.base_url),
            hover_card: HoverCard::new(&config.sidebar),
            config,
            storage,
            theme,
            language,
            sidebar,
            notifications: notifications::Manager::new(),
            monitor: Monitor::new(),
            volumes: volumes::State::default(),
            client_kind: None,
            now,
        }
    }

    /// Tasks issued once at startup.
    fn startup(&mut self, now: Instant) -> Task<Message> {
        let user_agent = Task::perform(
            api::user_agent::fetch_user_agent(self.client.clone()),
            Message::UserAgentFetched,
        );
        Task::batch([self.check_now(now), self.fetch_volumes(), user_agent])
    }

    fn check_now(&mut self, now: Instant) -> Task<Message> {
        let ticket = self.monitor.check_now(now);
        self.probe_task(ticket)
    }

    fn probe_task(&self, ticket: Option<ProbeTicket>) -> Task<Message> {
        match ticket {
            Some(ticket) => Task::perform(
                probe::run(self.client.clone(), ticket),
                |(ticket, outcome)| Message::ProbeFinished(ticket, outcome),
            ),
            None => Task::none(),
        }
    }

    fn fetch_volumes(&mut self) -> Task<Message> {
        if !self.volumes.begin_fetch() {
            return Task::none();
        }
        Task::perform(
            api::volumes::fetch_volumes(self.client.clone()),
            Message::VolumesFetched,
        )
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            self.i18n.tr(self.screen.title_key()),
            self.i18n.tr("app-name")
        )
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.has_pending_deadline()),
            subscription::create_system_theme_subscription(),
            subscription::create_live_subscription(&self.live),
        ])
    }

    /// Whether any component waits for a tick.
    fn has_pending_deadline(&self) -> bool {
        self.notifications.next_deadline().is_some()
            || self.monitor.next_deadline().is_some()
            || self.hover_card.next_deadline().is_some()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Tick(instant) => self.handle_tick(instant),
            Message::Notification(message) => {
                self.notifications.handle_message(&message, now);
                Task::none()
            }
            Message::Sidebar(message) => self.handle_sidebar_message(message, now),
            Message::Topbar(message) => self.handle_topbar_message(message),
            Message::Banner(message) => self.handle_banner_message(message, now),
            Message::Insights(message) => self.handle_insights_message(message),
            Message::Volumes(message) => self.handle_volumes_message(message),
            Message::Activity(message) => self.handle_activity_message(message),
            Message::ProbeFinished(ticket, outcome) => {
                self.monitor
                    .finish_probe(&ticket, outcome, now, &mut self.notifications);
                Task::none()
            }
            Message::VolumesFetched(result) => self.handle_volumes_fetched(result, now),
            Message::UserAgentFetched(result) => {
                self.client_kind =
                    crate::compat::announce(result, &self.storage, &mut self.notifications, now);
                Task::none()
            }
            Message::PollSystemTheme => {
                Task::perform(async { detect_system_dark() }, Message::SystemThemeDetected)
            }
            Message::SystemThemeDetected(is_dark) => {
                if self.theme.set_system_dark(is_dark) {
                    tracing::debug!(is_dark, "system color scheme changed");
                }
                Task::none()
            }
            Message::Live(update) => {
                self.live.apply(update);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            backend_url: &self.config.backend.base_url,
            theme_mode: self.theme.mode(),
            language: self.language.current(),
            sidebar_collapsed: self.sidebar.is_collapsed(),
            hover_card: &self.hover_card,
            notifications: &self.notifications,
            monitor: &self.monitor,
            volumes: &self.volumes,
            live: &self.live,
            now: self.now,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn client_kind(&self) -> Option<ClientKind> {
        self.client_kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LiveEvent, LiveStatus, Volume, VolumeListing};
    use crate::connectivity::{Latency, ProbeOutcome, Status};
    use crate::error::Error;
    use crate::preferences::{ThemeMode, LANGUAGE_STORAGE_KEY, THEME_STORAGE_KEY};
    use crate::ui::{activity, connectivity_banner, insights, sidebar, topbar};
    use std::time::Duration;

    fn app_with(storage: &Storage) -> App {
        App::from_parts(
            Config::default(),
            storage.clone(),
            Language::En,
            false,
            Instant::now(),
        )
    }

    fn app() -> App {
        app_with(&Storage::in_memory())
    }

    fn fail_probe(app: &mut App) {
        let ticket = app
            .monitor
            .check_now(Instant::now())
            .expect("no probe in flight");
        app.update(Message::ProbeFinished(
            ticket,
            ProbeOutcome::Failed {
                reason: "connection refused".into(),
            },
        ));
    }

    fn pass_probe(app: &mut App) {
        let ticket = app
            .monitor
            .check_now(Instant::now())
            .expect("no probe in flight");
        app.update(Message::ProbeFinished(
            ticket,
            ProbeOutcome::Healthy {
                latency: Latency::Measured(2_500_000),
            },
        ));
    }

    #[test]
    fn starts_on_insights_with_english_title() {
        let app = app();
        assert_eq!(app.screen(), Screen::Insights);
        assert_eq!(app.title(), "Insights - ipelfs");
    }

    #[test]
    fn stored_language_beats_first_run_language() {
        let storage = Storage::in_memory();
        storage.set(LANGUAGE_STORAGE_KEY, &Language::Zh);
        let app = App::from_parts(Config::default(), storage, Language::En, false, Instant::now());
        assert_eq!(app.i18n.language(), Language::Zh);
    }

    #[test]
    fn navigating_to_volumes_starts_a_fetch() {
        let mut app = app();
        app.update(Message::Sidebar(sidebar::Message::Navigate(Screen::Volumes)));
        assert_eq!(app.screen(), Screen::Volumes);
        assert!(app.volumes.is_loading());
        assert!(app.title().starts_with("Volumes"));
    }

    #[test]
    fn insights_shortcuts_navigate() {
        let mut app = app();
        app.update(Message::Insights(insights::Message::OpenActivity));
        assert_eq!(app.screen(), Screen::Activity);
        app.update(Message::Insights(insights::Message::OpenVolumes));
        assert_eq!(app.screen(), Screen::Volumes);
    }

    #[test]
    fn volume_result_is_stored() {
        let mut app = app();
        app.update(Message::Volumes(volumes::Message::Refresh));
        app.update(Message::VolumesFetched(Ok(VolumeListing {
            count: 1,
            volumes: vec![Volume {
                id: "v1".into(),
                path: "/data".into(),
            }],
            timestamp: None,
        })));
        assert_eq!(app.volumes.count(), 1);
        assert!(!app.volumes.is_loading());
    }

    #[test]
    fn background_volume_failure_raises_a_toast() {
        let mut app = app();
        app.update(Message::Volumes(volumes::Message::Refresh));
        app.update(Message::VolumesFetched(Err(Error::Http("timeout".into()))));
        assert_eq!(app.notifications.len(), 1);
        assert!(app.volumes.error().is_some());
    }

    #[test]
    fn volume_failure_on_volumes_screen_stays_inline() {
        let mut app = app();
        app.update(Message::Sidebar(sidebar::Message::Navigate(Screen::Volumes)));
        app.update(Message::VolumesFetched(Err(Error::Http("timeout".into()))));
        assert!(app.notifications.is_empty());
        assert!(app.volumes.error().is_some());
    }

    #[test]
    fn theme_toggle_cycles_and_persists() {
        let storage = Storage::in_memory();
        let mut app = app_with(&storage);
        let before = app.theme();

        app.update(Message::Topbar(topbar::Message::CycleTheme));
        assert_ne!(app.theme(), before);
        assert_eq!(storage.get::<ThemeMode>(THEME_STORAGE_KEY), Some(app.theme.mode()));
    }

    #[test]
    fn language_toggle_retranslates() {
        let storage = Storage::in_memory();
        let mut app = app_with(&storage);
        let english = app.title();

        app.update(Message::Topbar(topbar::Message::ToggleLanguage));
        assert_eq!(app.i18n.language(), Language::Zh);
        assert_ne!(app.title(), english);
        assert_eq!(storage.get::<Language>(LANGUAGE_STORAGE_KEY), Some(Language::Zh));
    }

    #[test]
    fn system_theme_change_applies_in_system_mode() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::Light);
        app.update(Message::SystemThemeDetected(true));
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn sidebar_toggle_persists() {
        let storage = Storage::in_memory();
        let mut app = app_with(&storage);
        app.update(Message::Sidebar(sidebar::Message::ToggleCollapsed));
        assert!(SidebarPreference::load(&storage).is_collapsed());
    }

    #[test]
    fn connection_loss_after_success_is_announced() {
        let mut app = app();
        pass_probe(&mut app);
        assert!(app.notifications.is_empty());

        fail_probe(&mut app);
        assert_eq!(app.monitor.status(), Status::Disconnected);
        assert_eq!(app.notifications.len(), 1);

        pass_probe(&mut app);
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn cold_start_failure_is_silent() {
        let mut app = app();
        fail_probe(&mut app);
        assert!(app.notifications.is_empty());
        assert!(app.has_pending_deadline());
    }

    #[test]
    fn banner_retry_arms_the_indicator() {
        let mut app = app();
        fail_probe(&mut app);

        app.update(Message::Banner(connectivity_banner::Message::Retry));
        assert!(app.monitor.retry_indicator().is_spinning());
        assert!(app.monitor.is_probing());
    }

    #[test]
    fn tick_expires_notifications() {
        let mut app = app();
        let start = Instant::now();
        app.notifications.push(Notification::info("screen-volumes"), start);

        app.update(Message::Tick(start + Duration::from_secs(6)));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn live_channel_follows_activity_controls() {
        let mut app = app();
        app.update(Message::Activity(activity::Message::Connect));
        assert_eq!(app.live.status(), LiveStatus::Connecting);

        let opened = app.live.tagged(LiveEvent::Opened);
        app.update(Message::Live(opened));
        let hello = app.live.tagged(LiveEvent::Received("hello".into()));
        app.update(Message::Live(hello));
        assert_eq!(app.live.last_message(), Some("hello"));

        app.update(Message::Activity(activity::Message::Disconnect));
        assert_eq!(app.live.status(), LiveStatus::Closed);
    }

    #[test]
    fn user_agent_lookup_classifies_client() {
        let mut app = app();
        app.update(Message::UserAgentFetched(Ok(Some(
            "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0".into(),
        ))));
        assert_eq!(app.client_kind(), Some(ClientKind::Firefox));
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn view_builds_with_card_banner_and_toasts() {
        let mut app = app();
        fail_probe(&mut app);
        let now = Instant::now();
        app.update(Message::Sidebar(sidebar::Message::TriggerEntered));
        app.hover_card.tick(now + Duration::from_secs(1));
        app.notifications.push(Notification::error("notification-connection-lost"), now);

        let _ = app.view();
    }
}
