//! Sparse vectors of fixed dimensionality.

use super::*;

/// A vector of `size` dimensions storing only its non-zero entries.
///
/// Indices are strictly increasing and every stored value is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SparseVectorData")]
pub struct SparseVector {
  /// Dimensionality
  size:    usize,
  /// Positions of the stored values, ascending
  indices: Vec<usize>,
  /// Stored values, parallel to `indices`
  values:  Vec<f64>,
}

impl SparseVector {
  /// The all-zero vector of dimensionality `size`.
  pub fn zeros(size: usize) -> Self { Self { size, indices: Vec::new(), values: Vec::new() } }

  /// Builds a vector from per-index values, dropping zeros.
  ///
  /// Entries at or beyond `size` are ignored.
  pub fn from_entries(size: usize, entries: BTreeMap<usize, f64>) -> Self {
    let (indices, values) =
      entries.into_iter().filter(|&(index, value)| index < size && value != 0.0).unzip();
    Self { size, indices, values }
  }

  /// Dimensionality of the vector.
  pub fn size(&self) -> usize { self.size }

  /// Number of stored (non-zero) entries.
  pub fn nnz(&self) -> usize { self.indices.len() }

  /// Value at `index`, zero when not stored.
  pub fn get(&self, index: usize) -> f64 {
    self.indices.binary_search(&index).map(|position| self.values[position]).unwrap_or(0.0)
  }

  /// Iterates over the stored `(index, value)` pairs in index order.
  pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
    self.indices.iter().copied().zip(self.values.iter().copied())
  }

  /// Returns a vector with `f` applied to every stored value, dropping results that are zero.
  pub fn map_values(&self, mut f: impl FnMut(usize, f64) -> f64) -> Self {
    let entries = self.iter().map(|(index, value)| (index, f(index, value))).collect();
    Self::from_entries(self.size, entries)
  }

  /// Expands the vector to a dense `Vec` of length `size`.
  pub fn to_dense(&self) -> Vec<f64> {
    let mut dense = vec![0.0; self.size];
    for (index, value) in self.iter() {
      dense[index] = value;
    }
    dense
  }
}

/// Unchecked serialized form of a [`SparseVector`].
#[derive(Deserialize)]
struct SparseVectorData {
  /// Dimensionality
  size:    usize,
  /// Positions of the stored values
  indices: Vec<usize>,
  /// Stored values
  values:  Vec<f64>,
}

impl TryFrom<SparseVectorData> for SparseVector {
  type Error = FolioError;

  fn try_from(data: SparseVectorData) -> Result<Self> {
    let SparseVectorData { size, indices, values } = data;
    if indices.len() != values.len() {
      return Err(FolioError::InvalidVector(format!(
        "{} indices but {} values",
        indices.len(),
        values.len()
      )));
    }
    if indices.windows(2).any(|pair| pair[0] >= pair[1]) {
      return Err(FolioError::InvalidVector("indices are not strictly increasing".into()));
    }
    if let Some(&last) = indices.last() {
      if last >= size {
        return Err(FolioError::InvalidVector(format!("index {last} out of range for size {size}")));
      }
    }
    if values.iter().any(|&value| value == 0.0) {
      return Err(FolioError::InvalidVector("stored values must be non-zero".into()));
    }
    Ok(Self { size, indices, values })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_entries_drops_zeros_and_out_of_range() {
    let entries = BTreeMap::from([(3, 2.0), (1, 0.0), (0, 1.5), (10, 4.0)]);
    let vector = SparseVector::from_entries(5, entries);

    assert_eq!(vector.size(), 5);
    assert_eq!(vector.nnz(), 2);
    assert_eq!(vector.iter().collect::<Vec<_>>(), vec![(0, 1.5), (3, 2.0)]);
    assert_eq!(vector.to_dense(), vec![1.5, 0.0, 0.0, 2.0, 0.0]);
  }

  #[test]
  fn test_get_and_map() {
    let vector = SparseVector::from_entries(4, BTreeMap::from([(1, 2.0), (2, 3.0)]));
    assert_eq!(vector.get(2), 3.0);
    assert_eq!(vector.get(0), 0.0);

    let scaled = vector.map_values(|index, value| if index == 1 { 0.0 } else { value * 2.0 });
    assert_eq!(scaled.iter().collect::<Vec<_>>(), vec![(2, 6.0)]);
    assert_eq!(scaled.size(), 4);
  }

  #[test]
  fn test_zeros() {
    let vector = SparseVector::zeros(10_000);
    assert_eq!(vector.size(), 10_000);
    assert_eq!(vector.nnz(), 0);
    assert_eq!(vector.to_dense().len(), 10_000);
  }

  #[test]
  fn test_deserialize_checks_entries() {
    let vector = SparseVector::from_entries(5, BTreeMap::from([(0, 1.5), (3, 2.0)]));
    let json = serde_json::to_string(&vector).unwrap();
    assert_eq!(serde_json::from_str::<SparseVector>(&json).unwrap(), vector);

    for invalid in [
      r#"{"size":3,"indices":[5],"values":[1.0]}"#,
      r#"{"size":5,"indices":[3,1],"values":[1.0,2.0]}"#,
      r#"{"size":5,"indices":[1,1],"values":[1.0,2.0]}"#,
      r#"{"size":5,"indices":[1],"values":[]}"#,
      r#"{"size":5,"indices":[1],"values":[0.0]}"#,
    ] {
      assert!(serde_json::from_str::<SparseVector>(invalid).is_err(), "{invalid}");
    }
  }
}
