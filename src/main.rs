use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use tracing::info;

mod error;
mod fetch;
mod platform;
mod state;
mod ui;

use error::FetchError;
use fetch::{FetchConfig, ImageFetcher, Viewport};
use platform::DesktopPlatform;
use state::controller::Controller;
use state::data::FetchedImage;

/// Phone-sized window by default
const INITIAL_WINDOW: Size = Size {
    width: 390.0,
    height: 844.0,
};

/// Which screen is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Main,
    History,
}

/// Main application state
struct RandomWallpaper {
    /// Owns the view state and the history
    controller: Controller,
    fetcher: ImageFetcher,
    platform: DesktopPlatform,
    /// One display handle per history entry, same order
    handles: Vec<Handle>,
    /// Current logical window size, used to size requests
    viewport: Viewport,
    screen: Screen,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User pressed "Fetch Image"
    FetchImage,
    /// Background fetch completed
    FetchFinished(Result<FetchedImage, FetchError>),
    ShareCurrent,
    SaveCurrent,
    /// Share a history entry by position
    ShareEntry(usize),
    /// Save a history entry by position
    SaveEntry(usize),
    OpenHistory,
    CloseHistory,
    DismissNotice,
    WindowResized(Size),
}

impl RandomWallpaper {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let platform = DesktopPlatform::new();
        match platform.library_dir() {
            Some(dir) => info!("🎨 Random Wallpaper started, saving to {}", dir.display()),
            None => info!("🎨 Random Wallpaper started, no picture library available"),
        }

        (
            RandomWallpaper {
                controller: Controller::new(),
                fetcher: ImageFetcher::new(FetchConfig::default()),
                platform,
                handles: Vec::new(),
                viewport: Viewport::from(INITIAL_WINDOW),
                screen: Screen::Main,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FetchImage => {
                let Some(dimensions) = self.controller.trigger_fetch(self.viewport) else {
                    return Task::none();
                };

                let fetcher = self.fetcher.clone();
                Task::perform(
                    async move { fetcher.fetch(dimensions).await },
                    Message::FetchFinished,
                )
            }
            Message::FetchFinished(outcome) => {
                self.controller.complete_fetch(outcome, &self.platform);
                self.sync_handles();
                Task::none()
            }
            Message::ShareCurrent => {
                self.controller.share_current(&self.platform);
                Task::none()
            }
            Message::SaveCurrent => {
                self.controller.save_current(&self.platform);
                Task::none()
            }
            Message::ShareEntry(index) => {
                if let Some(image) = self.controller.history().get(index).cloned() {
                    self.controller.share(&image, &self.platform);
                }
                Task::none()
            }
            Message::SaveEntry(index) => {
                if let Some(image) = self.controller.history().get(index).cloned() {
                    self.controller.save(&image, &self.platform);
                }
                Task::none()
            }
            Message::OpenHistory => {
                self.screen = Screen::History;
                Task::none()
            }
            Message::CloseHistory => {
                self.screen = Screen::Main;
                Task::none()
            }
            Message::DismissNotice => {
                self.controller.dismiss_notice();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.viewport = Viewport::from(size);
                Task::none()
            }
        }
    }

    /// Create display handles for history entries that don't have one yet
    fn sync_handles(&mut self) {
        let history = self.controller.history().all();
        for image in &history[self.handles.len()..] {
            self.handles.push(Handle::from_bytes(image.payload()));
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let nav = match self.screen {
            Screen::Main => button(text("History")).on_press(Message::OpenHistory),
            Screen::History => button(text("Back")).on_press(Message::CloseHistory),
        };
        let header = row![text("Random Wallpaper").size(28), horizontal_space(), nav.padding(10)]
            .align_y(Alignment::Center);

        let body = match self.screen {
            Screen::Main => {
                let fetch = button(text("Fetch Image"))
                    .on_press_maybe((!self.controller.is_loading()).then_some(Message::FetchImage))
                    .padding(10);

                column![
                    ui::gallery::view(self.controller.state(), self.handles.last()),
                    fetch,
                ]
                .spacing(20)
                .align_x(Alignment::Center)
                .height(Length::Fill)
            }
            Screen::History => {
                column![ui::history::view(self.controller.history(), &self.handles)]
                    .height(Length::Fill)
            }
        };

        let mut content = column![header, body].spacing(20).padding(20);

        if let Some(notice) = self.controller.notice() {
            content = content.push(
                row![
                    text(notice).size(14),
                    horizontal_space(),
                    button(text("Dismiss").size(14)).on_press(Message::DismissNotice),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Initialize logging; `RUST_LOG` overrides the default filter
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("random_wallpaper=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application(
        "Random Wallpaper",
        RandomWallpaper::update,
        RandomWallpaper::view,
    )
    .subscription(RandomWallpaper::subscription)
    .theme(RandomWallpaper::theme)
    .window_size(INITIAL_WINDOW)
    .centered()
    .run_with(RandomWallpaper::new)
}
