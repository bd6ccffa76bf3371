use glam::Vec2;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// An ordering of point indices and the length of the open path through
/// them in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
  pub order: Vec<usize>,
  pub length: f32,
}

/// Sum of the legs between consecutive points; no closing leg back to the
/// first point.
///
/// # Panics
///
/// Panics if `order` holds an index outside `points`.
pub fn path_length(order: &[usize], points: &[Vec2]) -> f32 {
  order
    .iter()
    .tuple_windows()
    .map(|(a, b)| points[*a].distance(points[*b]))
    .sum()
}

/// Tries every ordering of `points` and keeps the shortest open path. On a
/// tie the first ordering found wins, in lexicographic index order.
///
/// Runs in factorial time; meant for a handful of points. Points must be
/// finite: with a NaN point no ordering compares shorter, and the identity
/// order comes back with an infinite length.
pub fn shortest_tour(points: &[Vec2]) -> Tour {
  let count = points.len();
  if count > 9 {
    tracing::warn!("Searching every ordering of {count} points");
  }

  let mut best = Tour {
    order: (0..count).collect(),
    length: f32::INFINITY,
  };

  for order in (0..count).permutations(count) {
    let length = path_length(&order, points);
    if length < best.length {
      best = Tour { order, length };
    }
  }

  best
}

#[cfg(test)]
mod tests {
  use super::*;

  fn naive_minimum(points: &[Vec2]) -> f32 {
    fn visit(
      points: &[Vec2],
      order: &mut Vec<usize>,
      used: &mut Vec<bool>,
      best: &mut f32,
    ) {
      if order.len() == points.len() {
        *best = best.min(path_length(order, points));
        return;
      }
      for i in 0..points.len() {
        if !used[i] {
          used[i] = true;
          order.push(i);
          visit(points, order, used, best);
          order.pop();
          used[i] = false;
        }
      }
    }

    let mut best = f32::INFINITY;
    visit(
      points,
      &mut Vec::new(),
      &mut vec![false; points.len()],
      &mut best,
    );
    best
  }

  #[test]
  fn test_two_points() {
    let points = [Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)];
    let tour = shortest_tour(&points);

    assert_eq!(tour.order, vec![0, 1]);
    assert_eq!(tour.length, 5.0);
  }

  #[test]
  fn test_collinear_points_are_visited_in_line() {
    let points = [
      Vec2::new(2.0, 0.0),
      Vec2::new(0.0, 0.0),
      Vec2::new(3.0, 0.0),
      Vec2::new(1.0, 0.0),
    ];
    let tour = shortest_tour(&points);

    assert_eq!(tour.order, vec![1, 3, 0, 2]);
    assert_eq!(tour.length, 3.0);
  }

  #[test]
  fn test_matches_naive_minimum() {
    let sets = [
      vec![Vec2::new(0.1, 0.9), Vec2::new(0.5, 0.2), Vec2::new(0.8, 0.7)],
      vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 0.0),
      ],
      vec![
        Vec2::new(0.3, 0.4),
        Vec2::new(0.9, 0.1),
        Vec2::new(0.2, 0.8),
        Vec2::new(0.6, 0.6),
      ],
    ];

    for points in sets {
      let tour = shortest_tour(&points);
      assert_eq!(tour.order.len(), points.len());
      assert!((tour.length - naive_minimum(&points)).abs() < 1e-6);
      assert_eq!(tour.length, path_length(&tour.order, &points));
    }
  }

  #[test]
  fn test_ties_keep_first_ordering() {
    // A square: several orderings share the minimum of three sides.
    let points = [
      Vec2::new(0.0, 0.0),
      Vec2::new(1.0, 0.0),
      Vec2::new(1.0, 1.0),
      Vec2::new(0.0, 1.0),
    ];
    let tour = shortest_tour(&points);

    assert_eq!(tour.order, vec![0, 1, 2, 3]);
    assert_eq!(tour.length, 3.0);
  }

  #[test]
  #[should_panic]
  fn test_path_length_out_of_range() {
    path_length(&[0, 2], &[Vec2::ZERO, Vec2::ONE]);
  }

  #[test]
  fn test_non_finite_point() {
    let tour = shortest_tour(&[Vec2::ZERO, Vec2::NAN, Vec2::ONE]);
    assert_eq!(tour.order, vec![0, 1, 2]);
    assert!(tour.length.is_infinite());
  }

  #[test]
  fn test_degenerate_inputs() {
    assert_eq!(
      shortest_tour(&[]),
      Tour {
        order: vec![],
        length: 0.0
      }
    );
    assert_eq!(
      shortest_tour(&[Vec2::ONE]),
      Tour {
        order: vec![0],
        length: 0.0
      }
    );
  }
}
