use crate::model::Branch;

const SHORT_SHA_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct BranchCellViewModel {
    pub branch: Branch,
    pub title: String,
    /// Abbreviated head commit.
    pub detail: Option<String>,
}

impl BranchCellViewModel {
    pub fn new(branch: Branch) -> Self {
        let detail = branch
            .commit
            .as_ref()
            .map(|commit| commit.sha.chars().take(SHORT_SHA_LEN).collect());
        Self {
            title: branch.name.clone(),
            detail,
            branch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Commit;

    #[test]
    fn detail_is_short_sha() {
        let cell = BranchCellViewModel::new(Branch {
            name: "main".to_string(),
            commit: Some(Commit {
                sha: "6dcb09b5b57875f334f61aebed695e2e4193db5e".to_string(),
            }),
        });
        assert_eq!(cell.title, "main");
        assert_eq!(cell.detail.as_deref(), Some("6dcb09b"));
    }

    #[test]
    fn no_commit_no_detail() {
        let cell = BranchCellViewModel::new(Branch {
            name: "gh-pages".to_string(),
            commit: None,
        });
        assert_eq!(cell.detail, None);
    }
}
