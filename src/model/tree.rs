use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

// ---------------------------------------------------------------------------
// Regression tree
// ---------------------------------------------------------------------------

/// A node of a binary regression tree.
///
/// JSON form: `{"leaf": {"value": 12.5}}` or
/// `{"split": {"feature": 3, "threshold": 0.4, "left": …, "right": …}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Leaf {
        value: f64,
    },
    Split {
        /// Index into the schema-ordered feature row.
        feature: usize,
        /// Rows with `row[feature] <= threshold` go left.
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    /// Walk from this node to a leaf for one feature row.
    pub fn evaluate(&self, row: &[f64]) -> f64 {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold { &**left } else { &**right };
                }
            }
        }
    }

    /// Leaf nodes have depth 0.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Check split indices against `n_features` and that all numbers are finite.
    pub fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        match self {
            TreeNode::Leaf { value } => {
                if !value.is_finite() {
                    return Err(ArtifactError::NonFinite("leaf value"));
                }
                Ok(())
            }
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= n_features {
                    return Err(ArtifactError::SplitFeature {
                        index: *feature,
                        n_features,
                    });
                }
                if !threshold.is_finite() {
                    return Err(ArtifactError::NonFinite("split threshold"));
                }
                left.validate(n_features)?;
                right.validate(n_features)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: usize, threshold: f64, lo: f64, hi: f64) -> TreeNode {
        TreeNode::Split {
            feature,
            threshold,
            left: Box::new(TreeNode::Leaf { value: lo }),
            right: Box::new(TreeNode::Leaf { value: hi }),
        }
    }

    #[test]
    fn threshold_goes_left() {
        let tree = stump(1, 0.5, 10.0, 20.0);
        assert_eq!(tree.evaluate(&[0.0, 0.5]), 10.0);
        assert_eq!(tree.evaluate(&[0.0, 0.51]), 20.0);
    }

    #[test]
    fn nested_tree_depth_and_walk() {
        let tree = TreeNode::Split {
            feature: 0,
            threshold: 0.3,
            left: Box::new(TreeNode::Leaf { value: 1.0 }),
            right: Box::new(stump(1, 0.7, 2.0, 3.0)),
        };
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.evaluate(&[0.9, 0.9]), 3.0);
        assert_eq!(tree.evaluate(&[0.9, 0.1]), 2.0);
        assert_eq!(tree.evaluate(&[0.1, 0.9]), 1.0);
    }

    #[test]
    fn parses_json_form() {
        let json = r#"{"split": {"feature": 0, "threshold": 0.5,
            "left": {"leaf": {"value": 1.0}}, "right": {"leaf": {"value": 2.0}}}}"#;
        let tree: TreeNode = serde_json::from_str(json).unwrap();
        assert_eq!(tree, stump(0, 0.5, 1.0, 2.0));
    }

    #[test]
    fn rejects_out_of_range_split() {
        let err = stump(13, 0.5, 1.0, 2.0).validate(13).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::SplitFeature {
                index: 13,
                n_features: 13
            }
        ));
    }
}
