//! In- and out-degree rankings.

use super::*;

/// Number of edges touching one author on one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRanking {
  /// Author name
  pub author: String,
  /// Number of edges
  pub degree: usize,
}

/// Authors ranked by how many edges point at them (`author2`).
pub fn in_degree(edges: &[InfluenceEdge]) -> Vec<DegreeRanking> {
  rank(edges.iter().map(|edge| edge.author2.as_str()))
}

/// Authors ranked by how many edges leave them (`author1`).
pub fn out_degree(edges: &[InfluenceEdge]) -> Vec<DegreeRanking> {
  rank(edges.iter().map(|edge| edge.author1.as_str()))
}

/// Counts occurrences and sorts by count descending, then author ascending.
fn rank<'a>(authors: impl Iterator<Item = &'a str>) -> Vec<DegreeRanking> {
  let mut counts: HashMap<&str, usize> = HashMap::new();
  for author in authors {
    *counts.entry(author).or_default() += 1;
  }
  let mut ranking: Vec<DegreeRanking> = counts
    .into_iter()
    .map(|(author, degree)| DegreeRanking { author: author.to_string(), degree })
    .collect();
  ranking.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.author.cmp(&b.author)));
  ranking
}
