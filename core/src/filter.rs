use crate::config::AnalysisConfig;
use crate::error::FilterError;
use crate::posting::{Posting, PostingSet, Subset, SubsetKind};
use regex::{Regex, RegexBuilder};

/// How the remote subset was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteRule {
    FlagColumn,
    LocationPattern,
}

#[derive(Debug, Clone)]
pub struct Partition<'a> {
    pub local: Subset<'a>,
    pub remote: Subset<'a>,
    pub remote_rule: RemoteRule,
}

/// Split postings into the local (city) and remote subsets. Pure and order-preserving.
pub fn partition<'a>(set: &'a PostingSet, cfg: &AnalysisConfig) -> Result<Partition<'a>, FilterError> {
    let city = RegexBuilder::new(&regex::escape(&cfg.city))
        .case_insensitive(true)
        .build()
        .map_err(|source| FilterError::Pattern { pattern: cfg.city.clone(), source })?;
    let remote_re = RegexBuilder::new(&cfg.remote_pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| FilterError::Pattern { pattern: cfg.remote_pattern.clone(), source })?;

    let remote_rule = if set.has_remote_flag { RemoteRule::FlagColumn } else { RemoteRule::LocationPattern };
    match remote_rule {
        RemoteRule::FlagColumn => tracing::info!(column = %cfg.remote_flag_column, "remote subset from flag column"),
        RemoteRule::LocationPattern => tracing::info!(pattern = %cfg.remote_pattern, "remote subset from location pattern"),
    }

    let local: Vec<&Posting> = set.postings.iter().filter(|p| location_matches(p, &city)).collect();
    let remote: Vec<&Posting> = set
        .postings
        .iter()
        .filter(|p| match remote_rule {
            RemoteRule::FlagColumn => p.remote_allowed == Some(true),
            RemoteRule::LocationPattern => location_matches(p, &remote_re),
        })
        .filter(|p| !(cfg.exclusive_subsets && location_matches(p, &city)))
        .collect();

    let (n_local, n_remote) = (local.len(), remote.len());
    let empty = match (n_local == 0, n_remote == 0) {
        (true, true) => Some("local and remote"),
        (true, false) => Some("local"),
        (false, true) => Some("remote"),
        (false, false) => None,
    };
    if let Some(empty) = empty {
        tracing::warn!(local = n_local, remote = n_remote, "a subset found no postings");
        return Err(FilterError::EmptySubset { empty, local: n_local, remote: n_remote });
    }

    tracing::info!(local = n_local, remote = n_remote, "postings filtered");
    Ok(Partition {
        local: Subset { kind: SubsetKind::Local, postings: local },
        remote: Subset { kind: SubsetKind::Remote, postings: remote },
        remote_rule,
    })
}

fn location_matches(p: &Posting, re: &Regex) -> bool {
    p.location.as_deref().map_or(false, |l| re.is_match(l))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn posting(row_id: usize, location: Option<&str>, remote_allowed: Option<bool>) -> Posting {
        Posting { row_id, description: format!("job {row_id}"), location: location.map(str::to_string), remote_allowed }
    }

    fn set(postings: Vec<Posting>, has_remote_flag: bool) -> PostingSet {
        PostingSet { source: PathBuf::from("t.csv"), rows_read: postings.len(), has_remote_flag, postings }
    }

    fn ids(s: &Subset<'_>) -> Vec<usize> { s.postings.iter().map(|p| p.row_id).collect() }

    #[test]
    fn pattern_path_is_case_insensitive() {
        let s = set(
            vec![
                posting(0, Some("SÃO PAULO, SP"), None),
                posting(1, Some("Brasil (remoto)"), None),
                posting(2, None, None),
                posting(3, Some("Fully REMOTE"), None),
                posting(4, Some("Rio de Janeiro"), None),
            ],
            false,
        );
        let cfg = AnalysisConfig::default();
        let p = partition(&s, &cfg).unwrap();
        assert_eq!(ids(&p.local), vec![0]);
        assert_eq!(ids(&p.remote), vec![1, 3]);
        assert_eq!(p.remote_rule, RemoteRule::LocationPattern);
    }

    #[test]
    fn flag_column_wins_over_location() {
        let s = set(
            vec![
                posting(0, Some("São Paulo"), Some(true)),
                posting(1, Some("Remote"), Some(false)),
                posting(2, None, Some(true)),
            ],
            true,
        );
        let p = partition(&s, &AnalysisConfig::default()).unwrap();
        assert_eq!(ids(&p.local), vec![0]);
        assert_eq!(ids(&p.remote), vec![0, 2]);

        let exclusive = AnalysisConfig { exclusive_subsets: true, ..Default::default() };
        let p = partition(&s, &exclusive).unwrap();
        assert_eq!(ids(&p.remote), vec![2]);
    }

    #[test]
    fn empty_subset_is_reported() {
        let s = set(vec![posting(0, Some("Curitiba"), None), posting(1, Some("remote"), None)], false);
        let err = partition(&s, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, FilterError::EmptySubset { empty: "local", local: 0, remote: 1 }));
    }

    #[test]
    fn repeated_runs_agree() {
        let s = set(vec![posting(0, Some("são paulo"), None), posting(1, Some("Remoto"), None)], false);
        let cfg = AnalysisConfig::default();
        let a = partition(&s, &cfg).unwrap();
        let b = partition(&s, &cfg).unwrap();
        assert_eq!(ids(&a.local), ids(&b.local));
        assert_eq!(ids(&a.remote), ids(&b.remote));
    }
}
