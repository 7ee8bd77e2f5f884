use tokio::sync::watch;

use crate::config::ChannelConfig;
use crate::error::TransportFailure;
use crate::model::{Branch, Repository};
use crate::presentation::{
    derive, event_channel, EventStream, ListInput, PaginatedListEngine, PresentationCore,
    Transform,
};
use crate::provider::SharedProvider;

use super::cell::BranchCellViewModel;

pub struct BranchesInput {
    pub header_refresh: EventStream<()>,
    pub footer_refresh: EventStream<()>,
    pub selection: EventStream<BranchCellViewModel>,
}

pub struct BranchesOutput {
    pub navigation_title: watch::Receiver<String>,
    pub items: watch::Receiver<Vec<BranchCellViewModel>>,
    /// The glue pops the screen when a branch is chosen.
    pub branch_selected: EventStream<Branch>,
}

pub struct BranchesViewModel {
    core: PresentationCore,
    repository: watch::Sender<Repository>,
}

impl BranchesViewModel {
    pub fn new(repository: Repository, provider: SharedProvider) -> Self {
        Self::with_config(repository, provider, &ChannelConfig::default())
    }

    pub fn with_config(
        repository: Repository,
        provider: SharedProvider,
        channels: &ChannelConfig,
    ) -> Self {
        let (repository, _) = watch::channel(repository);
        Self {
            core: PresentationCore::with_config("branches", provider, channels),
            repository,
        }
    }

    pub fn core(&self) -> &PresentationCore {
        &self.core
    }
}

impl Transform for BranchesViewModel {
    type Input = BranchesInput;
    type Output = BranchesOutput;

    fn transform(&self, input: BranchesInput) -> BranchesOutput {
        let (selected_tx, branch_selected) = event_channel();
        let provider = self.core.provider().clone();
        let repository = self.repository.subscribe();

        let items = PaginatedListEngine::new(&self.core, move |page| {
            let fullname = repository.borrow().full_name.clone();
            let provider = provider.clone();
            async move {
                let branches = provider.branches(&fullname, page).await?;
                Ok::<_, TransportFailure>(
                    branches
                        .into_iter()
                        .map(BranchCellViewModel::new)
                        .collect::<Vec<_>>(),
                )
            }
        })
        .on_select(move |cell: BranchCellViewModel| {
            let _ = selected_tx.send(cell.branch);
        })
        .start(ListInput {
            header_refresh: input.header_refresh,
            footer_refresh: input.footer_refresh,
            selection: input.selection,
        });

        let navigation_title = derive(
            &self.core.teardown_handle(),
            self.repository.subscribe(),
            |_| "Branches".to_string(),
        );

        BranchesOutput {
            navigation_title,
            items,
            branch_selected,
        }
    }
}
