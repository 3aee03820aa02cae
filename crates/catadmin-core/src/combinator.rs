//! Cartesian product of attribute value lists.

/// Every combination that takes one value from each list, in lexicographic
/// order: the last list varies fastest.
///
/// Built by iterative accumulation from a single empty tuple, so zero input
/// lists yield exactly one empty combination and any empty list yields none.
/// Output size is the product of the list lengths; nothing is deduplicated.
#[must_use]
pub fn cartesian_product<S: AsRef<str>>(value_sets: &[&[S]]) -> Vec<Vec<String>> {
    let mut acc: Vec<Vec<String>> = vec![Vec::new()];

    for values in value_sets {
        let mut next = Vec::with_capacity(acc.len().saturating_mul(values.len()));
        for prefix in &acc {
            for value in *values {
                let mut combo = Vec::with_capacity(prefix.len() + 1);
                combo.extend(prefix.iter().cloned());
                combo.push(value.as_ref().to_string());
                next.push(combo);
            }
        }
        acc = next;
    }

    acc
}

/// Combinations for a product's selected attributes. Unlike
/// [`cartesian_product`], no selected attributes means no SKUs rather than a
/// single empty one.
#[must_use]
pub fn combinations_for<S: AsRef<str>>(value_sets: &[&[S]]) -> Vec<Vec<String>> {
    if value_sets.is_empty() {
        return Vec::new();
    }
    cartesian_product(value_sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_list_yields_one_tuple_per_value() {
        let colors = ["Red", "Blue"];
        let combos = cartesian_product(&[&colors[..]]);
        assert_eq!(combos, vec![vec!["Red"], vec!["Blue"]]);
    }

    #[test]
    fn last_list_varies_fastest() {
        let colors = ["Red", "Blue"];
        let sizes = ["S", "M"];
        let combos = cartesian_product(&[&colors[..], &sizes[..]]);
        assert_eq!(
            combos,
            vec![
                vec!["Red", "S"],
                vec!["Red", "M"],
                vec!["Blue", "S"],
                vec!["Blue", "M"],
            ]
        );
    }

    #[test]
    fn output_length_is_product_of_list_lengths() {
        let a = ["1", "2", "3"];
        let b = ["x", "y"];
        let c = ["p", "q", "r", "s"];
        let combos = cartesian_product(&[&a[..], &b[..], &c[..]]);
        assert_eq!(combos.len(), 3 * 2 * 4);
        assert!(combos.iter().all(|t| t.len() == 3));
    }

    #[test]
    fn zero_lists_yield_one_empty_combination() {
        let combos = cartesian_product::<&str>(&[]);
        assert_eq!(combos, vec![Vec::<String>::new()]);
    }

    #[test]
    fn zero_selected_attributes_yield_no_combinations() {
        let combos = combinations_for::<&str>(&[]);
        assert!(combos.is_empty());
    }

    #[test]
    fn an_empty_list_collapses_the_product() {
        let colors = ["Red", "Blue"];
        let none: [&str; 0] = [];
        let combos = cartesian_product(&[&colors[..], &none[..]]);
        assert!(combos.is_empty());
    }

    #[test]
    fn identical_values_under_different_lists_are_not_deduplicated() {
        let a = ["One"];
        let b = ["One"];
        let combos = cartesian_product(&[&a[..], &b[..]]);
        assert_eq!(combos, vec![vec!["One", "One"]]);
    }

    #[test]
    fn ordering_is_deterministic() {
        let colors = ["Red", "Green", "Blue"];
        let sizes = ["S", "M", "L"];
        let first = cartesian_product(&[&colors[..], &sizes[..]]);
        let second = cartesian_product(&[&colors[..], &sizes[..]]);
        assert_eq!(first, second);
    }

    #[test]
    fn many_lists_do_not_recurse() {
        let pair = ["a", "b"];
        let sets: Vec<&[&str]> = (0..16).map(|_| &pair[..]).collect();
        let combos = cartesian_product(sets.as_slice());
        assert_eq!(combos.len(), 1 << 16);
        assert_eq!(combos[0], vec!["a"; 16]);
        assert_eq!(combos[combos.len() - 1], vec!["b"; 16]);
    }
}
