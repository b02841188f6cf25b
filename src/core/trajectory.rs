use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::core::vector::Height;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample<P> {
    pub time_s: f64,
    pub position: P,
}

/// Time-ordered samples of a single flight, computed eagerly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory<P> {
    samples: Vec<Sample<P>>,
}

impl<P> Trajectory<P> {
    pub(crate) fn from_samples(samples: Vec<Sample<P>>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample<P>] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample<P>> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&Sample<P>> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample<P>> {
        self.samples.last()
    }

    pub fn positions(&self) -> impl Iterator<Item = P> + '_
    where
        P: Copy,
    {
        self.samples.iter().map(|sample| sample.position)
    }
}

impl<P: Height> Trajectory<P> {
    /// Index of the first sample with the greatest height.
    pub fn apex_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, sample) in self.samples.iter().enumerate() {
            let height = sample.position.height();
            if best.is_none_or(|(_, best_height)| height > best_height) {
                best = Some((idx, height));
            }
        }
        best.map(|(idx, _)| idx)
    }
}

impl<P> Index<usize> for Trajectory<P> {
    type Output = Sample<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl<'a, P> IntoIterator for &'a Trajectory<P> {
    type Item = &'a Sample<P>;
    type IntoIter = std::slice::Iter<'a, Sample<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Scalar results derived once from a computed flight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary<P> {
    pub time_of_flight_s: f64,
    pub range_m: f64,
    pub apex_height_m: f64,
    pub apex_position: P,
    pub landing_position: P,
}

#[cfg(test)]
mod tests {
    use super::{Sample, Trajectory};
    use crate::core::vector::Point2;

    fn path(heights: &[f64]) -> Trajectory<Point2> {
        Trajectory::from_samples(
            heights
                .iter()
                .enumerate()
                .map(|(i, &y)| Sample {
                    time_s: i as f64,
                    position: Point2::new(i as f64, y),
                })
                .collect(),
        )
    }

    #[test]
    fn apex_index_takes_first_maximum() {
        assert_eq!(path(&[0.0, 2.0, 5.0, 5.0, 1.0]).apex_index(), Some(2));
    }

    #[test]
    fn apex_index_of_empty_path_is_none() {
        assert_eq!(path(&[]).apex_index(), None);
    }

    #[test]
    fn indexing_and_iteration_agree() {
        let trajectory = path(&[0.0, 1.0, 0.0]);
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory[1].position, Point2::new(1.0, 1.0));
        assert_eq!(trajectory.iter().count(), 3);
        assert_eq!(trajectory.last().map(|s| s.time_s), Some(2.0));
    }
}
