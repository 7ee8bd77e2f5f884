use tokio::sync::watch;

use crate::config::ChannelConfig;
use crate::error::TransportFailure;
use crate::presentation::{
    derive, event_channel, EventStream, ListInput, NavigationIntent, PaginatedListEngine,
    PresentationCore, Scene, Transform,
};
use crate::provider::SharedProvider;

use super::cell::UserCellViewModel;
use super::mode::UsersMode;

pub struct UsersInput {
    pub header_refresh: EventStream<()>,
    pub footer_refresh: EventStream<()>,
    pub text_did_begin_editing: EventStream<()>,
    pub selection: EventStream<UserCellViewModel>,
}

pub struct UsersOutput {
    pub navigation_title: watch::Receiver<String>,
    pub items: watch::Receiver<Vec<UserCellViewModel>>,
    pub image_url: watch::Receiver<Option<String>>,
    pub text_did_begin_editing: EventStream<()>,
    /// One event per selection.
    pub dismiss_keyboard: EventStream<()>,
    /// Opens the details screen of the selected user.
    pub user_selected: EventStream<NavigationIntent>,
}

pub struct UsersViewModel {
    core: PresentationCore,
    mode: watch::Sender<UsersMode>,
}

impl UsersViewModel {
    pub fn new(mode: UsersMode, provider: SharedProvider) -> Self {
        Self::with_config(mode, provider, &ChannelConfig::default())
    }

    pub fn with_config(mode: UsersMode, provider: SharedProvider, channels: &ChannelConfig) -> Self {
        let (mode, _) = watch::channel(mode);
        Self {
            core: PresentationCore::with_config("users", provider, channels),
            mode,
        }
    }

    pub fn core(&self) -> &PresentationCore {
        &self.core
    }

    pub fn mode(&self) -> watch::Receiver<UsersMode> {
        self.mode.subscribe()
    }
}

impl Transform for UsersViewModel {
    type Input = UsersInput;
    type Output = UsersOutput;

    fn transform(&self, input: UsersInput) -> UsersOutput {
        let (dismiss_tx, dismiss_keyboard) = event_channel();
        let (selected_tx, user_selected) = event_channel();

        let provider = self.core.provider().clone();
        let next_provider = provider.clone();
        let mode = self.mode.subscribe();

        let items = PaginatedListEngine::new(&self.core, move |page| {
            let query = mode.borrow().query();
            let provider = provider.clone();
            async move {
                let users = query.fetch(provider.as_ref(), page).await?;
                Ok::<_, TransportFailure>(
                    users.into_iter().map(UserCellViewModel::new).collect::<Vec<_>>(),
                )
            }
        })
        .on_select(move |cell: UserCellViewModel| {
            let _ = dismiss_tx.send(());
            let _ = selected_tx.send(NavigationIntent::new(
                Scene::UserDetails { user: cell.user },
                &next_provider,
            ));
        })
        .start(ListInput {
            header_refresh: input.header_refresh,
            footer_refresh: input.footer_refresh,
            selection: input.selection,
        });

        let teardown = self.core.teardown_handle();
        let navigation_title = derive(&teardown, self.mode.subscribe(), |mode| {
            mode.navigation_title().to_string()
        });
        let image_url = derive(&teardown, self.mode.subscribe(), UsersMode::image_url);

        UsersOutput {
            navigation_title,
            items,
            image_url,
            text_did_begin_editing: input.text_did_begin_editing,
            dismiss_keyboard,
            user_selected,
        }
    }
}
