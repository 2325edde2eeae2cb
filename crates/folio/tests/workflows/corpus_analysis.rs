use super::*;

fn victorian_corpus() -> TempDir {
  create_corpus(&[
    ("dickens", book("Charles Dickens", "November, 1994 [EBook #98]", "English", "It was the best of times.")),
    ("eliot", book("George Eliot", "July 1, 1996 [EBook #145]", "English", "Miss Brooke had that kind of beauty.")),
    ("hugo", book("Victor Hugo", "June 22, 2008 [EBook #135]", "French", "En 1815, M. Myriel était évêque.")),
    ("dickens-two", book("Charles Dickens", "January, 1998 [EBook #1400]", "English", "My father's family name being Pirrip.")),
    ("anonymous", "No header here at all, only text.\n".to_string()),
  ])
}

#[traced_test]
#[tokio::test]
async fn test_full_report() -> TestResult<()> {
  let dir = victorian_corpus();
  let config = Config::default().with_corpus(txt_pattern(dir.path())).with_window(5);
  let report: Report = Analysis::new(config).run().await?;

  assert_eq!(report.document_count, 5);
  assert!(report.line_count > report.document_count);
  assert_eq!(report.top_languages[0].language, "English");
  assert_eq!(report.top_languages[0].count, 3);
  assert_eq!(report.text_presence, 1.0);
  assert_eq!(report.feature_schema.num_features, 10_000);
  assert_eq!(report.feature_schema.num_rows, 5);

  // Dickens 1994 -> Eliot 1996 and Eliot 1996 -> Dickens 1998; Hugo 2008 is out of reach.
  assert_eq!(report.edge_count, 2);
  assert_eq!(report.edge_sample, vec![
    InfluenceEdge::new("Charles Dickens", "George Eliot", 1994, 1996),
    InfluenceEdge::new("George Eliot", "Charles Dickens", 1996, 1998),
  ]);

  let in_sum: usize = report.top_in_degree.iter().map(|r| r.degree).sum();
  let out_sum: usize = report.top_out_degree.iter().map(|r| r.degree).sum();
  assert_eq!(in_sum, report.edge_count);
  assert_eq!(out_sum, report.edge_count);
  Ok(())
}

#[tokio::test]
async fn test_header_values_are_trimmed_of_line_endings() -> TestResult<()> {
  let dir = victorian_corpus();
  let config = Config::default().with_corpus(txt_pattern(dir.path())).with_sample_size(10);
  let report = Analysis::new(config).run().await?;

  let hugo = report
    .metadata_sample
    .iter()
    .find(|r| r.document_id.ends_with("hugo.txt"))
    .expect("hugo is in the sample");
  assert_eq!(hugo.author, "Victor Hugo");
  assert_eq!(hugo.language, "French");
  assert_eq!(hugo.year, Some(2008));

  let anonymous = report
    .metadata_sample
    .iter()
    .find(|r| r.document_id.ends_with("anonymous.txt"))
    .expect("anonymous is in the sample");
  assert_eq!(anonymous.author, "");
  assert_eq!(anonymous.year, None);
  Ok(())
}

#[tokio::test]
async fn test_wider_window_and_dedup_policy() -> TestResult<()> {
  let dir = victorian_corpus();
  let config = Config::default()
    .with_corpus(txt_pattern(dir.path()))
    .with_window(20)
    .with_dedup(DedupPolicy::FirstSeen);
  let report = Analysis::new(config).run().await?;

  // Dickens has two release years; each ordered author pair still yields a single edge.
  let pairs: Vec<(&str, &str)> =
    report.edge_sample.iter().map(|e| (e.author1.as_str(), e.author2.as_str())).collect();
  let mut unique = pairs.clone();
  unique.dedup();
  assert_eq!(pairs, unique);
  assert_eq!(report.edge_count, 4);
  Ok(())
}

#[tokio::test]
async fn test_missing_corpus_is_fatal() {
  let dir = tempdir().unwrap();
  let config = Config::default().with_corpus(txt_pattern(dir.path()));

  let result = Analysis::new(config).run().await;
  assert!(matches!(result, Err(FolioError::NoCorpusMatches(_))));
}

#[tokio::test]
async fn test_json_report() -> TestResult<()> {
  let dir = victorian_corpus();
  let config = Config::default().with_corpus(txt_pattern(dir.path()));
  let report = Analysis::new(config).run().await?;

  let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;
  assert_eq!(json["document_count"], 5);
  assert_eq!(json["feature_schema"]["num_features"], 10_000);
  assert_eq!(json["config"]["dedup"], "smallest_gap");
  Ok(())
}
