use super::*;

mod corpus_analysis;
