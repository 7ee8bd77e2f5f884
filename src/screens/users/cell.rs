use crate::model::User;

/// One row of a users list.
#[derive(Debug, Clone)]
pub struct UserCellViewModel {
    pub user: User,
    pub title: String,
    pub detail: String,
    /// Repository count and follower count, when known.
    pub stats: Option<String>,
    pub image_url: Option<String>,
    pub following: bool,
}

impl UserCellViewModel {
    pub fn new(user: User) -> Self {
        let detail = match (user.contributions, &user.name) {
            (Some(contributions), _) => format!("{} commits", contributions),
            (None, Some(name)) => name.clone(),
            (None, None) => String::new(),
        };

        let mut stats = Vec::new();
        if let Some(repositories) = user.repositories_count {
            stats.push(format!("{} repositories", repositories));
        }
        if let Some(followers) = user.followers {
            stats.push(format!("{} followers", k_formatted(followers)));
        }

        Self {
            title: user.login.clone(),
            detail,
            stats: (!stats.is_empty()).then(|| stats.join("  ")),
            image_url: user.avatar_url.clone(),
            following: user.viewer_is_following.unwrap_or(false),
            user,
        }
    }

    /// The follow button only shows for a logged-in viewer who may follow.
    pub fn hides_follow_button(&self, logged_in: bool) -> bool {
        if !logged_in {
            return true;
        }
        !self.user.viewer_can_follow.unwrap_or(false)
    }
}

impl PartialEq for UserCellViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
    }
}

/// `999` → `"999"`, `1234` → `"1.2k"`, `2000000` → `"2m"`.
pub fn k_formatted(value: u32) -> String {
    fn scaled(value: u32, unit: f64, suffix: &str) -> String {
        let text = format!("{:.1}", value as f64 / unit);
        let text = text.strip_suffix(".0").unwrap_or(&text);
        format!("{}{}", text, suffix)
    }

    match value {
        0..=999 => value.to_string(),
        1_000..=999_999 => scaled(value, 1_000.0, "k"),
        _ => scaled(value, 1_000_000.0, "m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_contributions() {
        let user = User {
            contributions: Some(42),
            name: Some("The Octocat".to_string()),
            ..User::new("octocat")
        };
        let cell = UserCellViewModel::new(user);
        assert_eq!(cell.title, "octocat");
        assert_eq!(cell.detail, "42 commits");
    }

    #[test]
    fn detail_falls_back_to_name_then_empty() {
        let named = User {
            name: Some("The Octocat".to_string()),
            ..User::new("octocat")
        };
        assert_eq!(UserCellViewModel::new(named).detail, "The Octocat");
        assert_eq!(UserCellViewModel::new(User::new("anon")).detail, "");
    }

    #[test]
    fn stats_line() {
        let user = User {
            repositories_count: Some(8),
            followers: Some(3_938),
            ..User::new("octocat")
        };
        assert_eq!(
            UserCellViewModel::new(user).stats.as_deref(),
            Some("8 repositories  3.9k followers")
        );
        assert_eq!(UserCellViewModel::new(User::new("anon")).stats, None);
    }

    #[test]
    fn follow_button_visibility() {
        let followable = UserCellViewModel::new(User {
            viewer_can_follow: Some(true),
            ..User::new("a")
        });
        assert!(followable.hides_follow_button(false));
        assert!(!followable.hides_follow_button(true));

        let unknown = UserCellViewModel::new(User::new("b"));
        assert!(unknown.hides_follow_button(true));
    }

    #[test]
    fn cells_compare_by_user() {
        let a = UserCellViewModel::new(User::new("a"));
        let mut b = UserCellViewModel::new(User::new("a"));
        b.detail = "changed".to_string();
        assert_eq!(a, b);
        assert_ne!(a, UserCellViewModel::new(User::new("c")));
    }

    #[test]
    fn k_formatting() {
        assert_eq!(k_formatted(0), "0");
        assert_eq!(k_formatted(999), "999");
        assert_eq!(k_formatted(1_000), "1k");
        assert_eq!(k_formatted(1_234), "1.2k");
        assert_eq!(k_formatted(2_000_000), "2m");
        assert_eq!(k_formatted(2_560_000), "2.6m");
    }
}
