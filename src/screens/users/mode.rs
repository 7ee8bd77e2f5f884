use crate::error::TransportFailure;
use crate::model::{Repository, User};
use crate::provider::DataProvider;

/// Which users a users screen lists.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersMode {
    Followers(User),
    Following(User),
    Watchers(Repository),
    Stars(Repository),
    Contributors(Repository),
}

/// Provider call parameters for a [`UsersMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersQuery {
    Followers { username: String },
    Following { username: String },
    Watchers { fullname: String },
    Stargazers { fullname: String },
    Contributors { fullname: String },
}

impl UsersMode {
    pub fn query(&self) -> UsersQuery {
        match self {
            UsersMode::Followers(user) => UsersQuery::Followers {
                username: user.login.clone(),
            },
            UsersMode::Following(user) => UsersQuery::Following {
                username: user.login.clone(),
            },
            UsersMode::Watchers(repository) => UsersQuery::Watchers {
                fullname: repository.full_name.clone(),
            },
            UsersMode::Stars(repository) => UsersQuery::Stargazers {
                fullname: repository.full_name.clone(),
            },
            UsersMode::Contributors(repository) => UsersQuery::Contributors {
                fullname: repository.full_name.clone(),
            },
        }
    }

    pub fn navigation_title(&self) -> &'static str {
        match self {
            UsersMode::Followers(_) => "Followers",
            UsersMode::Following(_) => "Following",
            UsersMode::Watchers(_) => "Watchers",
            UsersMode::Stars(_) => "Stargazers",
            UsersMode::Contributors(_) => "Contributors",
        }
    }

    /// Avatar shown in the header: the user's own, or the repository owner's.
    pub fn image_url(&self) -> Option<String> {
        match self {
            UsersMode::Followers(user) | UsersMode::Following(user) => user.avatar_url.clone(),
            UsersMode::Watchers(repository)
            | UsersMode::Stars(repository)
            | UsersMode::Contributors(repository) => repository
                .owner
                .as_ref()
                .and_then(|owner| owner.avatar_url.clone()),
        }
    }
}

impl UsersQuery {
    pub async fn fetch(
        &self,
        provider: &dyn DataProvider,
        page: u32,
    ) -> Result<Vec<User>, TransportFailure> {
        match self {
            UsersQuery::Followers { username } => provider.user_followers(username, page).await,
            UsersQuery::Following { username } => provider.user_following(username, page).await,
            UsersQuery::Watchers { fullname } => provider.watchers(fullname, page).await,
            UsersQuery::Stargazers { fullname } => provider.stargazers(fullname, page).await,
            UsersQuery::Contributors { fullname } => provider.contributors(fullname, page).await,
        }
    }
}
