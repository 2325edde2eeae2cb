//! Candidate edge generation, the influence predicate, and edge dedup.

use super::*;

/// A directed "may have influenced" edge from an earlier to a later author.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InfluenceEdge {
  /// Earlier author (source)
  pub author1: String,
  /// Later author (target)
  pub author2: String,
  /// Release year of `author1`'s book
  pub year1:   i32,
  /// Release year of `author2`'s book
  pub year2:   i32,
}

impl InfluenceEdge {
  /// Creates an edge.
  pub fn new(author1: impl Into<String>, author2: impl Into<String>, year1: i32, year2: i32) -> Self {
    Self { author1: author1.into(), author2: author2.into(), year1, year2 }
  }

  /// Years between the two releases.
  pub fn gap(&self) -> i32 { self.year2 - self.year1 }
}

/// Which edge survives when an ordered author pair satisfies the window more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
  /// Keep the first candidate in generation order.
  FirstSeen,
  /// Keep the candidate with the smallest year gap, then the earliest `year1`.
  #[default]
  SmallestGap,
}

impl std::fmt::Display for DedupPolicy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DedupPolicy::FirstSeen => write!(f, "first_seen"),
      DedupPolicy::SmallestGap => write!(f, "smallest_gap"),
    }
  }
}

impl std::str::FromStr for DedupPolicy {
  type Err = FolioError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().replace('-', "_").as_str() {
      "first_seen" => Ok(DedupPolicy::FirstSeen),
      "smallest_gap" => Ok(DedupPolicy::SmallestGap),
      _ => Err(FolioError::Config(format!(
        "Unknown dedup policy \"{s}\", expected first_seen or smallest_gap"
      ))),
    }
  }
}

/// Whether `earlier` may have influenced `later`.
///
/// True iff the authors differ and `later` was released strictly after `earlier`, at most
/// `window` years later.
pub fn is_influence(earlier: &AuthorYear, later: &AuthorYear, window: i32) -> bool {
  let gap = i64::from(later.year) - i64::from(earlier.year);
  earlier.author != later.author && gap > 0 && gap <= i64::from(window)
}

/// Generates every edge between pairs passing [`is_influence`].
///
/// Later authors are looked up through a year index, so only years in `(year, year + window]`
/// are visited instead of the full cross product. Output is ordered by source pair, then target
/// year, then target author.
pub fn candidates(pairs: &BTreeSet<AuthorYear>, window: i32) -> Vec<InfluenceEdge> {
  let mut edges = Vec::new();
  if window < 1 {
    return edges;
  }

  let mut by_year: BTreeMap<i32, Vec<&AuthorYear>> = BTreeMap::new();
  for pair in pairs {
    by_year.entry(pair.year).or_default().push(pair);
  }

  for earlier in pairs {
    let first = earlier.year.saturating_add(1);
    let last = earlier.year.saturating_add(window);
    for later in by_year.range(first..=last).flat_map(|(_, pairs)| pairs.iter()) {
      if is_influence(earlier, later, window) {
        edges.push(InfluenceEdge::new(
          earlier.author.as_str(),
          later.author.as_str(),
          earlier.year,
          later.year,
        ));
      }
    }
  }
  trace!("{} candidate edges", edges.len());
  edges
}

/// Keeps exactly one edge per `(author1, author2)`, chosen by `policy`.
///
/// The result is sorted by `(author1, author2)`.
pub fn dedup(edges: Vec<InfluenceEdge>, policy: DedupPolicy) -> Vec<InfluenceEdge> {
  let mut kept: BTreeMap<(String, String), InfluenceEdge> = BTreeMap::new();
  for edge in edges {
    let key = (edge.author1.clone(), edge.author2.clone());
    match kept.get_mut(&key) {
      None => {
        kept.insert(key, edge);
      },
      Some(existing) =>
        if policy == DedupPolicy::SmallestGap
          && (edge.gap(), edge.year1) < (existing.gap(), existing.year1)
        {
          *existing = edge;
        },
    }
  }
  kept.into_values().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pairs(items: &[(&str, i32)]) -> BTreeSet<AuthorYear> {
    items.iter().map(|&(author, year)| AuthorYear::new(author, year)).collect()
  }

  #[test]
  fn test_predicate() {
    let a = AuthorYear::new("A", 1990);
    assert!(is_influence(&a, &AuthorYear::new("B", 1993), 5));
    assert!(is_influence(&a, &AuthorYear::new("B", 1995), 5));
    assert!(!is_influence(&a, &AuthorYear::new("B", 1996), 5));
    assert!(!is_influence(&a, &AuthorYear::new("B", 1990), 5));
    assert!(!is_influence(&a, &AuthorYear::new("B", 1989), 5));
    assert!(!is_influence(&a, &AuthorYear::new("A", 1992), 5));
  }

  #[test]
  fn test_candidates_example() {
    let edges = candidates(&pairs(&[("A", 1990), ("B", 1993), ("C", 2000)]), 5);
    assert_eq!(edges, vec![InfluenceEdge::new("A", "B", 1990, 1993)]);
  }

  #[test]
  fn test_candidates_match_cross_product() {
    let set = pairs(&[
      ("A", 1850),
      ("B", 1851),
      ("A", 1853),
      ("C", 1855),
      ("D", 1855),
      ("B", 1860),
      ("E", 1861),
      ("C", 1870),
    ]);
    for window in [1, 3, 5, 10, 30] {
      let mut expected: Vec<InfluenceEdge> = set
        .iter()
        .flat_map(|a| set.iter().map(move |b| (a, b)))
        .filter(|(a, b)| is_influence(a, b, window))
        .map(|(a, b)| InfluenceEdge::new(a.author.as_str(), b.author.as_str(), a.year, b.year))
        .collect();
      let mut actual = candidates(&set, window);
      expected.sort();
      actual.sort();
      assert_eq!(actual, expected, "window {window}");
    }
  }

  #[test]
  fn test_candidates_with_empty_window() {
    assert!(candidates(&pairs(&[("A", 1990), ("B", 1991)]), 0).is_empty());
  }

  #[test]
  fn test_dedup_keeps_one_edge_per_pair() {
    let set = pairs(&[("A", 1990), ("A", 1992), ("B", 1993), ("B", 1994)]);
    let edges = candidates(&set, 5);
    assert_eq!(edges.len(), 4);

    for policy in [DedupPolicy::FirstSeen, DedupPolicy::SmallestGap] {
      let deduped = dedup(edges.clone(), policy);
      assert_eq!(deduped.len(), 1, "{policy}");
      assert_eq!((deduped[0].author1.as_str(), deduped[0].author2.as_str()), ("A", "B"));
    }
  }

  #[test]
  fn test_dedup_policies() {
    let edges = vec![
      InfluenceEdge::new("A", "B", 1990, 1994),
      InfluenceEdge::new("A", "B", 1991, 1993),
      InfluenceEdge::new("A", "B", 1992, 1994),
      InfluenceEdge::new("B", "C", 1994, 1995),
    ];

    assert_eq!(dedup(edges.clone(), DedupPolicy::FirstSeen), vec![
      InfluenceEdge::new("A", "B", 1990, 1994),
      InfluenceEdge::new("B", "C", 1994, 1995),
    ]);
    assert_eq!(dedup(edges, DedupPolicy::SmallestGap), vec![
      InfluenceEdge::new("A", "B", 1991, 1993),
      InfluenceEdge::new("B", "C", 1994, 1995),
    ]);
  }

  #[test]
  fn test_policy_parsing() {
    assert_eq!("first_seen".parse::<DedupPolicy>().unwrap(), DedupPolicy::FirstSeen);
    assert_eq!("Smallest-Gap".parse::<DedupPolicy>().unwrap(), DedupPolicy::SmallestGap);
    assert!("closest".parse::<DedupPolicy>().is_err());
    assert_eq!(DedupPolicy::SmallestGap.to_string(), "smallest_gap");
  }
}
