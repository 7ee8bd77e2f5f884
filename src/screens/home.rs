//! Home tab bar: which tabs exist and what each tab opens.

use tokio::sync::watch;

use crate::model::User;
use crate::presentation::{
    event_channel, EventStream, EventsMode, NavigationIntent, NotificationsMode,
    PresentationCore, Scene, Transform,
};
use crate::provider::SharedProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeTabBarItem {
    Search,
    News,
    Notifications,
    Settings,
    Login,
}

impl HomeTabBarItem {
    pub fn title(&self) -> &'static str {
        match self {
            HomeTabBarItem::Search => "Search",
            HomeTabBarItem::News => "Events",
            HomeTabBarItem::Notifications => "Notifications",
            HomeTabBarItem::Settings => "Settings",
            HomeTabBarItem::Login => "Login",
        }
    }

    pub fn for_session(authorized: bool) -> Vec<HomeTabBarItem> {
        if authorized {
            vec![
                HomeTabBarItem::News,
                HomeTabBarItem::Search,
                HomeTabBarItem::Notifications,
                HomeTabBarItem::Settings,
            ]
        } else {
            vec![
                HomeTabBarItem::Search,
                HomeTabBarItem::Login,
                HomeTabBarItem::Settings,
            ]
        }
    }
}

/// Release notes shown once after launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsNew {
    pub version: String,
}

impl WhatsNew {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

pub struct HomeTabBarInput {
    pub whats_new_trigger: EventStream<()>,
}

pub struct HomeTabBarOutput {
    pub tab_bar_items: watch::Receiver<Vec<HomeTabBarItem>>,
    /// Emits at most once.
    pub open_whats_new: EventStream<WhatsNew>,
}

pub struct HomeTabBarViewModel {
    core: PresentationCore,
    current_user: Option<User>,
}

impl HomeTabBarViewModel {
    /// `current_user` is the signed-in user, if any.
    pub fn new(current_user: Option<User>, provider: SharedProvider) -> Self {
        Self {
            core: PresentationCore::new("home", provider),
            current_user,
        }
    }

    pub fn authorized(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn core(&self) -> &PresentationCore {
        &self.core
    }

    /// Root screen of a tab.
    ///
    /// `None` for the news tab when nobody is signed in.
    pub fn scene_for(&self, item: HomeTabBarItem) -> Option<NavigationIntent> {
        let scene = match item {
            HomeTabBarItem::Search => Scene::Search,
            HomeTabBarItem::News => match &self.current_user {
                Some(user) => Scene::Events {
                    mode: EventsMode::User(user.clone()),
                },
                None => {
                    tracing::warn!("News tab requested without a signed-in user");
                    return None;
                }
            },
            HomeTabBarItem::Notifications => Scene::Notifications {
                mode: NotificationsMode::Mine,
            },
            HomeTabBarItem::Settings => Scene::Settings,
            HomeTabBarItem::Login => Scene::Login,
        };
        Some(NavigationIntent::new(scene, self.core.provider()))
    }
}

impl Transform for HomeTabBarViewModel {
    type Input = HomeTabBarInput;
    type Output = HomeTabBarOutput;

    fn transform(&self, input: HomeTabBarInput) -> HomeTabBarOutput {
        let (_, tab_bar_items) = watch::channel(HomeTabBarItem::for_session(self.authorized()));

        let (whats_new_tx, open_whats_new) = event_channel();
        let mut trigger = input.whats_new_trigger;
        self.core.spawn(async move {
            if trigger.recv().await.is_some() {
                let _ = whats_new_tx.send(WhatsNew::current());
            }
        });

        HomeTabBarOutput {
            tab_bar_items,
            open_whats_new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_depend_on_session() {
        assert_eq!(
            HomeTabBarItem::for_session(true),
            vec![
                HomeTabBarItem::News,
                HomeTabBarItem::Search,
                HomeTabBarItem::Notifications,
                HomeTabBarItem::Settings,
            ]
        );
        assert_eq!(
            HomeTabBarItem::for_session(false),
            vec![
                HomeTabBarItem::Search,
                HomeTabBarItem::Login,
                HomeTabBarItem::Settings,
            ]
        );
    }
}
