//! Tree ensembles (random forest, single decision tree).

use serde::{Deserialize, Serialize};

use crate::ports::{Classifier, ClassifierError};

/// One node of a flattened decision tree.
///
/// Children always sit at a higher index than their parent, which is how
/// sklearn lays trees out and what makes traversal terminate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// Positive-class probability at this leaf.
        value: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!("node {idx} splits on feature {feature} of {n_features}"));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx} has a non-finite threshold"));
                    }
                    for child in [left, right] {
                        if *child <= idx || *child >= self.nodes.len() {
                            return Err(format!("node {idx} has invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !(0.0..=1.0).contains(value) {
                        return Err(format!("leaf {idx} value {value} outside [0, 1]"));
                    }
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, row: &[f64]) -> Result<f64, ClassifierError> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    idx = if row[*feature] <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ClassifierError::Evaluation(format!(
                        "node index {idx} out of range"
                    )))
                }
            }
        }
    }
}

/// Ensemble of trees whose leaf probabilities are averaged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestModel {
    pub feature_names: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    /// Sanity-check the exported trees.
    ///
    /// # Errors
    /// Returns a description of the first malformed tree.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err("feature_names is empty".into());
        }
        if self.trees.is_empty() {
            return Err("forest has no trees".into());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(n).map_err(|e| format!("tree {i}: {e}"))?;
        }
        Ok(())
    }

    fn probability(&self, row: &[f64]) -> Result<f64, ClassifierError> {
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.evaluate(row)?;
        }
        Ok(sum / self.trees.len() as f64)
    }
}

impl Classifier for ForestModel {
    fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    fn predict(&self, row: &[f64]) -> Result<f64, ClassifierError> {
        if row.len() != self.n_features() {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.n_features(),
                got: row.len(),
            });
        }
        Ok(if self.probability(row)? > 0.5 { 1.0 } else { 0.0 })
    }

    fn kind(&self) -> &'static str {
        "forest"
    }
}
