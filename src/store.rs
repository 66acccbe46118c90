//! The store module
//! Provide append-only storage and nearest-neighbor query for vectors

use crate::distance::euclidean;
use crate::error::Result;
use serde::{Serialize, Deserialize};

/// An identified vector, optionally annotated with a computed distance.
///
/// The `distance` field is only meaningful on values returned from
/// [`VectorStore::find_nearest`], where it holds the Euclidean distance to
/// the query point. On inserted vectors it is ignored and defaults to `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub id: String,
    pub values: Vec<f64>,
    #[serde(default)]
    pub distance: f64,
}

impl Vector {
    /// Creates a vector with the given ID and components.
    ///
    /// # Examples
    ///
    /// ```
    /// use neardb::Vector;
    ///
    /// let v = Vector::new("vec_1", vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v.id, "vec_1");
    /// assert_eq!(v.distance, 0.0);
    /// ```
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Vector {
        Vector { id: id.into(), values, distance: 0.0 }
    }
}

/// Append-only, insertion-ordered collection of vectors with brute-force
/// nearest-neighbor query.
#[derive(Debug, Default)]
pub struct VectorStore {
    vects: Vec<Vector>,
}

impl VectorStore {
    /// Creates a new empty vector store.
    ///
    /// # Examples
    ///
    /// ```
    /// use neardb::VectorStore;
    ///
    /// let store = VectorStore::new();
    /// assert_eq!(store.len(), 0);
    /// ```
    pub fn new() -> VectorStore {
        VectorStore { vects: Vec::new() }
    }

    /// Appends a vector to the store.
    ///
    /// No validation is performed: IDs are not required to be unique and the
    /// dimension is not checked against previously stored vectors. A store
    /// holding mixed dimensions is legal; a query against it fails on the
    /// first mismatching comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use neardb::{Vector, VectorStore};
    ///
    /// let mut store = VectorStore::new();
    /// store.insert(Vector::new("vec_1", vec![3.0, 4.0]));
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn insert(&mut self, vector: Vector) {
        self.vects.push(vector);
    }

    /// Finds the stored vector nearest to the query point.
    ///
    /// Scans the full store in insertion order, computing the Euclidean
    /// distance of each entry to `query`. The comparison is strictly
    /// less-than, so on a tie the earliest-inserted vector wins. The winner
    /// is returned as a copy with its `distance` field set.
    ///
    /// On an empty store this returns a sentinel with an empty ID and
    /// `distance` of positive infinity instead of an error; callers that
    /// need to distinguish "not found" must check for the infinite distance.
    ///
    /// # Arguments
    ///
    /// * `query` - Components of the query point
    ///
    /// # Returns
    ///
    /// * `Ok(Vector)` - The nearest vector, annotated with its distance
    /// * `Err(StoreError)` - Dimension mismatch between `query` and a stored
    ///   vector; the scan is abandoned and no partial result is returned
    ///
    /// # Examples
    ///
    /// ```
    /// use neardb::{Vector, VectorStore};
    ///
    /// let mut store = VectorStore::new();
    /// store.insert(Vector::new("vec_1", vec![1.0, 2.0, 3.0]));
    /// store.insert(Vector::new("vec_2", vec![4.0, 5.0, 6.0]));
    ///
    /// let nearest = store.find_nearest(&[2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(nearest.id, "vec_1");
    /// assert!((nearest.distance - 3.0_f64.sqrt()).abs() < 1e-12);
    ///
    /// // Empty store returns the infinite-distance sentinel, not an error
    /// let empty = VectorStore::new();
    /// let sentinel = empty.find_nearest(&[1.0]).unwrap();
    /// assert!(sentinel.id.is_empty());
    /// assert!(sentinel.distance.is_infinite());
    /// ```
    pub fn find_nearest(&self, query: &[f64]) -> Result<Vector> {
        let mut nearest = Vector {
            id: String::new(),
            values: Vec::new(),
            distance: f64::INFINITY,
        };

        for v in &self.vects {
            let dist = euclidean(query, &v.values)?;

            if dist < nearest.distance {
                nearest = v.clone();
                nearest.distance = dist;
            }
        }

        Ok(nearest)
    }

    /// Retrieves the first stored vector with the given ID, or `None` if no
    /// such vector exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use neardb::{Vector, VectorStore};
    ///
    /// let mut store = VectorStore::new();
    /// store.insert(Vector::new("vec_1", vec![1.0, 2.0]));
    ///
    /// assert!(store.get("vec_1").is_some());
    /// assert!(store.get("vec_2").is_none());
    /// ```
    pub fn get(&self, id: &str) -> Option<&Vector> {
        self.vects.iter().find(|v| v.id == id)
    }

    /// Returns all stored vectors in insertion order.
    pub fn list(&self) -> &[Vector] {
        &self.vects
    }

    /// Returns the number of vectors in the store.
    pub fn len(&self) -> usize {
        self.vects.len()
    }

    /// Checks whether the store holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vects.is_empty()
    }
}

#[cfg(test)]
mod store_test {
    use super::*;
    use crate::error::StoreError;

    fn sample_store() -> VectorStore {
        let mut store = VectorStore::new();
        store.insert(Vector::new("vec_1", vec![1.0, 2.0, 3.0]));
        store.insert(Vector::new("vec_2", vec![4.0, 5.0, 6.0]));
        store.insert(Vector::new("vec_3", vec![7.0, 8.0, 9.0]));
        store
    }

    // ========== Insert Tests ==========

    #[test]
    fn test_insert_preserves_order() {
        let store = sample_store();

        assert_eq!(store.len(), 3);
        let ids: Vec<&str> = store.list().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["vec_1", "vec_2", "vec_3"]);
    }

    #[test]
    fn test_insert_duplicate_ids_kept() {
        let mut store = VectorStore::new();
        store.insert(Vector::new("dup", vec![1.0, 0.0]));
        store.insert(Vector::new("dup", vec![0.0, 1.0]));

        // No deduplication: both entries are retained
        assert_eq!(store.len(), 2);
        // get returns the first one in insertion order
        assert_eq!(store.get("dup").unwrap().values, vec![1.0, 0.0]);
    }

    #[test]
    fn test_insert_mixed_dimensions_allowed() {
        let mut store = VectorStore::new();
        store.insert(Vector::new("two", vec![1.0, 2.0]));
        store.insert(Vector::new("three", vec![1.0, 2.0, 3.0]));

        // Insert never validates dimensions
        assert_eq!(store.len(), 2);
    }

    // ========== FindNearest Tests ==========

    #[test]
    fn test_find_nearest_basic() {
        let store = sample_store();

        let nearest = store.find_nearest(&[2.0, 3.0, 4.0]).unwrap();

        assert_eq!(nearest.id, "vec_1");
        assert_eq!(nearest.values, vec![1.0, 2.0, 3.0]);
        // sqrt(3)
        assert!((nearest.distance - 1.7320508075688772).abs() < 1e-12);
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let store = sample_store();

        let nearest = store.find_nearest(&[4.0, 5.0, 6.0]).unwrap();

        assert_eq!(nearest.id, "vec_2");
        assert_eq!(nearest.distance, 0.0);
    }

    #[test]
    fn test_find_nearest_tie_first_inserted_wins() {
        let mut store = VectorStore::new();
        store.insert(Vector::new("a", vec![0.0, 0.0]));
        store.insert(Vector::new("b", vec![0.0, 0.0]));

        let nearest = store.find_nearest(&[1.0, 1.0]).unwrap();

        // Strictly-less-than comparison: later ties never replace the winner
        assert_eq!(nearest.id, "a");
    }

    #[test]
    fn test_find_nearest_empty_store_sentinel() {
        let store = VectorStore::new();

        let nearest = store.find_nearest(&[1.0, 2.0]).unwrap();

        assert_eq!(nearest.id, "");
        assert!(nearest.values.is_empty());
        assert_eq!(nearest.distance, f64::INFINITY);
    }

    #[test]
    fn test_find_nearest_dimension_mismatch() {
        let store = sample_store();

        let result = store.find_nearest(&[1.0, 2.0]);

        assert_eq!(
            result.unwrap_err(),
            StoreError::DimensionMismatch { expected: 2, actual: 3 }
        );
    }

    #[test]
    fn test_find_nearest_mismatch_mid_scan() {
        let mut store = VectorStore::new();
        store.insert(Vector::new("ok", vec![0.0, 0.0]));
        store.insert(Vector::new("bad", vec![0.0, 0.0, 0.0]));

        // The first comparison succeeds, but its result is discarded when the
        // second entry fails the dimension check
        let result = store.find_nearest(&[1.0, 1.0]);

        assert!(result.is_err());
    }

    #[test]
    fn test_find_nearest_result_is_a_copy() {
        let mut store = VectorStore::new();
        store.insert(Vector::new("vec_1", vec![1.0, 2.0]));

        let mut nearest = store.find_nearest(&[1.0, 2.0]).unwrap();
        nearest.id = "mutated".to_string();
        nearest.values[0] = 99.0;

        // Mutating the returned value leaves the stored entry intact
        let stored = store.get("vec_1").unwrap();
        assert_eq!(stored.values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_find_nearest_does_not_annotate_storage() {
        let mut store = VectorStore::new();
        store.insert(Vector::new("vec_1", vec![3.0, 4.0]));

        let nearest = store.find_nearest(&[0.0, 0.0]).unwrap();
        assert!((nearest.distance - 5.0).abs() < 1e-12);

        // The distance annotation lives only on the query result
        assert_eq!(store.get("vec_1").unwrap().distance, 0.0);
    }

    // ========== Get / List Tests ==========

    #[test]
    fn test_get_existing_vector() {
        let store = sample_store();

        let v = store.get("vec_2").unwrap();
        assert_eq!(v.values, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_get_nonexistent_vector() {
        let store = sample_store();

        assert!(store.get("vec_4").is_none());
    }

    #[test]
    fn test_get_from_empty_store() {
        let store = VectorStore::new();

        assert!(store.get("vec_1").is_none());
    }

    #[test]
    fn test_list_empty_store() {
        let store = VectorStore::new();

        assert!(store.list().is_empty());
        assert!(store.is_empty());
    }
}
