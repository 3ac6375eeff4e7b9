use metrics::{IntoLabels, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holder of multiple [Label] providing some methods to easily clone and add new labels in it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    pub fn new(labels: &[(impl ToString, impl ToString)]) -> Self {
        Labels(
            labels
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Clone the actual [Labels] with additional key-value labels. A key that is already
    /// present takes the value from `additional_labels`.
    pub fn clone_with_labels(&self, additional_labels: Labels) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.0);
        Labels(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(key, value)| Label::new(key, value))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::Labels;
    use metrics::{IntoLabels, Label};

    #[test]
    fn test_clone_labels() {
        let labels = Labels::new(&[("key_1", "value_1")]);

        let labels_2 = labels.clone_with_labels(Labels::new(&[("key_2", "value_2")]));
        let label_list = labels_2.into_labels();
        assert!(label_list.contains(&Label::new("key_1", "value_1")));
        assert!(label_list.contains(&Label::new("key_2", "value_2")));

        let labels_3 = labels.clone_with_labels(Labels::new(&[
            ("key_3", "value_3"),
            ("key_4", "value_4"),
        ]));
        let label_list = labels_3.into_labels();
        assert!(label_list.contains(&Label::new("key_1", "value_1")));
        assert!(!label_list.contains(&Label::new("key_2", "value_2")));
        assert!(label_list.contains(&Label::new("key_3", "value_3")));
        assert!(label_list.contains(&Label::new("key_4", "value_4")));
    }

    #[test]
    fn additional_labels_override_existing_keys() {
        let labels = Labels::new(&[("env", "prod")]);
        let label_list = labels
            .clone_with_labels(Labels::new(&[("env", "staging")]))
            .into_labels();
        assert_eq!(label_list, vec![Label::new("env", "staging")]);
    }

    #[test]
    fn labels_deserialize_from_json_object() {
        let labels: Labels = serde_json::from_str(r#"{"service": "kyc"}"#).unwrap();
        assert_eq!(labels, Labels::new(&[("service", "kyc")]));
        assert!(!labels.is_empty());
    }
}
