use crate::models::{DonutSlice, SeriesPoint, StatCardData};

const EVENT_VOLUME_POINTS: usize = 28;

/// Headline counters shown above the charts. These are static until the backend
/// exposes aggregate endpoints.
pub fn stat_cards() -> Vec<StatCardData> {
    vec![
        StatCardData::new("New Alerts", "43", 6),
        StatCardData::new("Resolved Today", "17", -3),
        StatCardData::new("New Events", "7", 3),
        StatCardData::new("Hosts Monitored", "27.3k", 3),
        StatCardData::new("Avg Risk Score", "95", 2),
        StatCardData::new("Rules", "621", -1),
    ]
}

pub fn severity_split() -> Vec<DonutSlice> {
    vec![DonutSlice::new("Normal", 72.0), DonutSlice::new("Flagged", 28.0)]
}

pub fn event_type_breakdown() -> Vec<DonutSlice> {
    vec![
        DonutSlice::new("CPU", 47.0),
        DonutSlice::new("Auth", 33.0),
        DonutSlice::new("Net", 20.0),
    ]
}

/// Synthetic event volume: a slow sine wave with a weekly sawtooth on top.
pub fn event_volume() -> Vec<SeriesPoint> {
    (0..EVENT_VOLUME_POINTS)
        .map(|i| {
            let x = i as f64;
            let y = (20.0 + (x / 2.0).sin() * 10.0 + (i % 7) as f64).round();
            SeriesPoint { x, y }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_cards_with_mixed_deltas() {
        let cards = stat_cards();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[3].value, "27.3k");
        assert_eq!(cards.iter().filter(|card| !card.is_positive()).count(), 2);
    }

    #[test]
    fn event_volume_shape() {
        let series = event_volume();
        assert_eq!(series.len(), 28);
        assert_eq!(series[0], SeriesPoint { x: 0.0, y: 20.0 });
        // sin(0.5) * 10 = 4.79, plus 1
        assert_eq!(series[1].y, 26.0);
        assert!(series.iter().all(|point| point.y == point.y.round()));
    }

    #[test]
    fn donuts_are_percentages() {
        for slices in [severity_split(), event_type_breakdown()] {
            let total: f64 = slices.iter().map(|slice| slice.value).sum();
            assert_eq!(total, 100.0);
        }
    }
}
