// Math utilities and helper functions

/// Check whether two horizontal spans overlap.
///
/// Spans are given as a start coordinate plus a length and are treated as
/// open at both ends: touching edges do not count as overlap. Used for
/// platform landing checks and attack hitbox tests alike.
pub fn spans_overlap(a_start: f32, a_len: f32, b_start: f32, b_len: f32) -> bool {
    a_start < b_start + b_len && a_start + a_len > b_start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_overlap() {
        assert!(spans_overlap(0.0, 10.0, 5.0, 10.0));
        assert!(spans_overlap(5.0, 10.0, 0.0, 10.0));
        assert!(spans_overlap(2.0, 2.0, 0.0, 10.0)); // contained
    }

    #[test]
    fn test_spans_disjoint() {
        assert!(!spans_overlap(0.0, 10.0, 20.0, 10.0));
        assert!(!spans_overlap(20.0, 10.0, 0.0, 10.0));
    }

    #[test]
    fn test_spans_touching_edges_do_not_overlap() {
        assert!(!spans_overlap(0.0, 10.0, 10.0, 10.0));
        assert!(!spans_overlap(10.0, 10.0, 0.0, 10.0));
    }
}
