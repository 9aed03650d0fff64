//! Erkennung eines einzelnen geschlossenen Umrisses aus der Segmentliste.

use super::Segment;
use std::collections::BTreeMap;

/// Liefert die Punkt-Indizes des geschlossenen Umrisses in Laufreihenfolge.
///
/// Bedingungen: mindestens drei Segmente, jeder verwendete Punkt hat genau
/// Grad 2, und der Lauf ab dem ersten Punkt des ersten Segments besucht alle
/// verwendeten Punkte, bevor er zum Start zurückkehrt. Mehrere getrennte
/// Ringe, Verzweigungen oder offene Enden ergeben `None`.
pub fn closed_polygon(segments: &[Segment]) -> Option<Vec<usize>> {
    if segments.len() < 3 {
        return None;
    }

    let mut adjacency: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for seg in segments {
        adjacency.entry(seg.a).or_default().push(seg.b);
        adjacency.entry(seg.b).or_default().push(seg.a);
    }
    if adjacency.values().any(|neighbors| neighbors.len() != 2) {
        return None;
    }

    let start = segments[0].a;
    let mut polygon = vec![start];
    let mut prev: Option<usize> = None;
    let mut current = start;

    // Jeder Schritt besucht einen neuen Punkt; mehr Schritte als Punkte heißt: kein Ring.
    for _ in 0..adjacency.len() {
        let neighbors = adjacency.get(&current)?;
        let next = if Some(neighbors[0]) == prev {
            neighbors[1]
        } else {
            neighbors[0]
        };

        if next == start {
            let covers_all = polygon.len() == adjacency.len();
            return (covers_all && polygon.len() >= 3).then_some(polygon);
        }
        if polygon.contains(&next) {
            return None;
        }

        polygon.push(next);
        prev = Some(current);
        current = next;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(indices: &[usize]) -> Vec<Segment> {
        indices
            .iter()
            .zip(indices.iter().cycle().skip(1))
            .map(|(&a, &b)| Segment::new(a, b))
            .collect()
    }

    #[test]
    fn square_walks_in_order() {
        let segments = ring(&[0, 1, 2, 3]);
        assert_eq!(closed_polygon(&segments), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn walk_follows_adjacency_not_segment_order() {
        let segments = vec![
            Segment::new(0, 1),
            Segment::new(2, 3),
            Segment::new(1, 2),
            Segment::new(3, 0),
        ];
        assert_eq!(closed_polygon(&segments), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn open_chain_is_rejected() {
        let segments = vec![Segment::new(0, 1), Segment::new(1, 2), Segment::new(2, 3)];
        assert_eq!(closed_polygon(&segments), None);
    }

    #[test]
    fn branch_is_rejected() {
        let mut segments = ring(&[0, 1, 2, 3]);
        segments.push(Segment::new(0, 4));
        assert_eq!(closed_polygon(&segments), None);
    }

    #[test]
    fn two_disjoint_rings_are_rejected() {
        let mut segments = ring(&[0, 1, 2]);
        segments.extend(ring(&[3, 4, 5]));
        assert_eq!(closed_polygon(&segments), None);
    }

    #[test]
    fn too_few_segments_are_rejected() {
        assert_eq!(closed_polygon(&[]), None);
        assert_eq!(
            closed_polygon(&[Segment::new(0, 1), Segment::new(1, 0)]),
            None
        );
    }
}
