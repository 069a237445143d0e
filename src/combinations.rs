use crate::types::{Combination, Manifest, Parameter};

/// Lazy Cartesian product over a manifest's parameters.
///
/// The first parameter varies slowest and the last fastest, exactly like a
/// set of nested loops in manifest order. An empty parameter list yields a
/// single empty combination.
pub(crate) struct Combinations<'a> {
    parameters: &'a [Parameter],
    indices: Vec<usize>,
    remaining: usize,
}

impl<'a> Combinations<'a> {
    pub(crate) fn new(parameters: &'a [Parameter]) -> Self {
        let remaining = parameters
            .iter()
            .fold(1usize, |acc, p| acc.saturating_mul(p.values.len()));
        Self {
            parameters,
            indices: vec![0; parameters.len()],
            remaining,
        }
    }

    fn current(&self) -> Combination<'a> {
        let parameters: &'a [Parameter] = self.parameters;
        let entries = parameters
            .iter()
            .zip(&self.indices)
            .map(|(param, &idx)| (param.name.as_str(), &param.values[idx]))
            .collect();
        Combination { entries }
    }

    /// Odometer step: bump the last index, carrying leftwards.
    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.parameters[pos].values.len() {
                return;
            }
            self.indices[pos] = 0;
        }
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let combination = self.current();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

/// Every combination of the manifest's parameter values, in export order.
pub(crate) fn enumerate(manifest: &Manifest) -> Combinations<'_> {
    Combinations::new(&manifest.parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::NamePattern;
    use crate::types::ParamValue;
    use std::collections::HashSet;

    fn param(name: &str, values: &[&str]) -> Parameter {
        Parameter {
            name: name.to_string(),
            values: values
                .iter()
                .map(|v| ParamValue::Text(v.to_string()))
                .collect(),
        }
    }

    fn manifest(parameters: Vec<Parameter>) -> Manifest {
        Manifest {
            name_pattern: NamePattern::parse("{a}.png"),
            parameters,
        }
    }

    fn rendered(manifest: &Manifest) -> Vec<String> {
        enumerate(manifest)
            .map(|c| {
                c.entries
                    .iter()
                    .map(|(_, v)| v.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect()
    }

    #[test]
    fn first_parameter_varies_slowest() {
        let m = manifest(vec![
            param("color", &["red", "blue"]),
            param("size", &["small", "large"]),
        ]);
        assert_eq!(
            rendered(&m),
            vec!["red,small", "red,large", "blue,small", "blue,large"]
        );
    }

    #[test]
    fn count_is_product_of_value_counts() {
        let m = manifest(vec![
            param("a", &["1", "2", "3"]),
            param("b", &["x"]),
            param("c", &["p", "q"]),
            param("d", &["u", "v", "w", "z"]),
        ]);
        assert_eq!(m.combination_count(), 24);
        let iter = enumerate(&m);
        assert_eq!(iter.len(), 24);
        let all = rendered(&m);
        assert_eq!(all.len(), 24);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 24);
        assert_eq!(all.first().map(String::as_str), Some("1,x,p,u"));
        assert_eq!(all.last().map(String::as_str), Some("3,x,q,z"));
    }

    #[test]
    fn entries_follow_manifest_order() {
        let m = manifest(vec![param("zeta", &["1"]), param("alpha", &["2"])]);
        let first = enumerate(&m).next().unwrap();
        let names: Vec<&str> = first.entries.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn no_parameters_yields_one_empty_combination() {
        let m = manifest(Vec::new());
        let all: Vec<_> = enumerate(&m).collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].entries.is_empty());
    }

    #[test]
    fn empty_value_list_yields_nothing() {
        let m = manifest(vec![param("a", &["1", "2"]), param("b", &[])]);
        assert_eq!(enumerate(&m).count(), 0);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let m = manifest(vec![param("a", &["1", "2"]), param("b", &["x", "y"])]);
        let mut iter = enumerate(&m);
        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.by_ref().for_each(drop);
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
    }
}
